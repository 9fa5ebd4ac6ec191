//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use super::error::ApiError;

/// Path-extracted user identifier.
///
/// A malformed identifier cannot match any stored user, so rejection is
/// the same not-found response a failed lookup produces. Handlers using
/// this only ever run with a well-formed id.
pub struct UserId(pub Uuid);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::UserNotFound)?;

        let id = Uuid::parse_str(&raw).map_err(|_| ApiError::UserNotFound)?;
        Ok(Self(id))
    }
}
