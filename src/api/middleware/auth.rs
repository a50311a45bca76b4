//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::UserRole;
use crate::errors::AppError;
use crate::services::AccessTokenClaims;

/// Authenticated principal extracted from a verified access token.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub roles: Vec<UserRole>,
}

impl From<AccessTokenClaims> for CurrentUser {
    fn from(claims: AccessTokenClaims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            roles: claims.roles,
        }
    }
}

/// Bearer-token authentication middleware.
///
/// Extracts the access token from the Authorization header, verifies
/// it through the token signer, and injects the [`CurrentUser`] into
/// the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = AccessTokenClaims::from_value(state.token_signer.verify(token)?)?;

    request.extensions_mut().insert(CurrentUser::from(claims));

    Ok(next.run(request).await)
}
