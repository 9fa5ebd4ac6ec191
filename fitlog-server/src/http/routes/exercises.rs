//! Exercise endpoint: append an entry to a user's log

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::UserId;
use crate::http::server::AppState;
use crate::models::ExerciseEntry;

/// Add exercise request (form-encoded); every field arrives as raw text
#[derive(Debug, Default, Deserialize)]
pub struct AddExerciseRequest {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Added-entry response: the user's identity plus the coerced entry,
/// not the full log
#[derive(Serialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// POST /api/users/{id}/exercises
///
/// The entry is coerced before the store is touched, so a rejected
/// request can never leave a partial write behind.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    form: Result<Form<AddExerciseRequest>, FormRejection>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let req = form.map(|Form(req)| req).unwrap_or_default();
    let entry = ExerciseEntry::from_form(req.description, req.duration, req.date)?;

    let user = UserRepo::new(&state.pool)
        .append_entry(id, &entry)
        .await
        .map_err(|err| ApiError::from_db("Unable to add exercise", err))?;

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        description: entry.description,
        duration: entry.duration,
        date: entry.date,
    }))
}

/// Exercise routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/users/{id}/exercises", post(add_exercise))
}
