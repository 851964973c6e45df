use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::ApiError;
use crate::models::auth::SessionUser;

/// Session key under which the authenticated user is stored.
pub const SESSION_USER_KEY: &str = "auth_user";

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::Internal(anyhow::anyhow!(msg)))?;

        session
            .get::<SessionUser>(SESSION_USER_KEY)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Usuário não autenticado".to_string()))
    }
}
