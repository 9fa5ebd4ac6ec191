//! User endpoints: create and list

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{UserRecord, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ExerciseEntry;

/// Create user request (form-encoded)
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// Create user response: identity only, no log
#[derive(Serialize)]
pub struct CreateUserResponse {
    pub username: String,
    pub id: Uuid,
}

/// Full user document response
#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub log: Vec<ExerciseEntry>,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username,
            log: user.log.0,
        }
    }
}

/// POST /api/users - create a user with an empty log
///
/// An unreadable body degrades to an absent username; the store's
/// constraints then reject the insert, which is the documented
/// creation-failure response.
async fn create_user(
    State(state): State<Arc<AppState>>,
    form: Result<Form<CreateUserRequest>, FormRejection>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let req = form.map(|Form(req)| req).unwrap_or_default();

    let user = UserRepo::new(&state.pool)
        .create(req.username.as_deref())
        .await
        .map_err(|err| ApiError::from_db("Unable to create user", err))?;

    Ok(Json(CreateUserResponse {
        username: user.username,
        id: user.id,
    }))
}

/// GET /api/users - every user document, logs included
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool)
        .list()
        .await
        .map_err(|err| ApiError::from_db("Unable to fetch users", err))?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}
