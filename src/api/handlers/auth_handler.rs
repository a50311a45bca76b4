//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::domain::{CreateUserInput, UserIdentity, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::services::{AuthTokenOutput, RefreshTokenClaims};

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Login name
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefreshTokenRequest {
    /// Refresh token obtained from login
    #[validate(length(min = 1, message = "Refresh token is required"))]
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

/// Create authentication routes
pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh-token", post(refresh_token))
        .route(
            "/me",
            get(me).layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = CreateUserInput,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUserInput>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.auth_service.register(input).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and get an access/refresh token pair
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthTokenOutput),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthTokenOutput>> {
    let user = state
        .auth_service
        .validate_user(payload.username, payload.password)
        .await?;

    let tokens = state.auth_service.login(&user)?;

    Ok(Json(tokens))
}

/// Exchange a refresh token for a new token pair
#[utoipa::path(
    post,
    path = "/auth/refresh-token",
    tag = "Authentication",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "New token pair issued", body = AuthTokenOutput),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid, expired, or orphaned refresh token")
    )
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenRequest>,
) -> AppResult<Json<AuthTokenOutput>> {
    let claims = RefreshTokenClaims::from_value(state.token_signer.verify(&payload.refresh_token)?)?;

    let tokens = state.auth_service.refresh_token(claims.sub).await?;

    Ok(Json(tokens))
}

/// Get the authenticated user's current record
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserIdentity),
        (status = 401, description = "Missing or invalid access token")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<UserIdentity>> {
    let identity = state
        .user_service
        .find_by_id(current.id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(identity))
}
