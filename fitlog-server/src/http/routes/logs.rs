//! Log retrieval endpoint

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::UserId;
use crate::http::server::AppState;
use crate::models::{render_log, ExerciseEntry, LogFilter, LogQueryParams};

/// Log retrieval response; `count` is the length of `log` after
/// filtering, not the stored total
#[derive(Serialize)]
pub struct LogResponse {
    pub id: Uuid,
    pub username: String,
    pub log: Vec<ExerciseEntry>,
    pub count: usize,
}

/// GET /api/users/{id}/logs - a user's log with optional range and limit
///
/// Query parameters are coerced before the store is touched; malformed
/// values are rejected rather than silently skewing the result.
async fn get_log(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    Query(params): Query<LogQueryParams>,
) -> Result<Json<LogResponse>, ApiError> {
    let filter = LogFilter::from_params(params)?;

    let user = UserRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(|err| ApiError::from_db("Unable to retrieve logs", err))?;

    let log = render_log(user.log.0, &filter);

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}

/// Log routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/users/{id}/logs", get(get_log))
}
