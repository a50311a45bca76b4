//! Authentication service - login, registration, and token refresh.
//!
//! Pure orchestration: credential checks go to the user store, signing
//! goes to the token signer, expiries come from configuration. No
//! session state is kept anywhere; every call stands alone.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::{CreateUserInput, UserIdentity, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::services::{TokenSigner, UserService};

/// Token pair returned after successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenOutput {
    /// Short-lived JWT proving identity on subsequent requests
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Longer-lived JWT used solely to obtain a new pair
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

/// Authentication service contract.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials via the user store; InvalidCredentials
    /// propagates unmodified.
    async fn validate_user(&self, username: String, password: String) -> AppResult<UserIdentity>;

    /// Issue a token pair for an already-validated user. Pure; no I/O.
    fn login(&self, user: &UserIdentity) -> AppResult<AuthTokenOutput>;

    /// Create a user via the user store. Input is validated at the
    /// request boundary; this adds nothing.
    async fn register(&self, input: CreateUserInput) -> AppResult<UserResponse>;

    /// Re-issue both tokens from the freshly loaded user record, so
    /// role changes since the refresh token was minted are picked up.
    /// Unauthorized if the subject no longer resolves to a user.
    async fn refresh_token(&self, user_id: Uuid) -> AppResult<AuthTokenOutput>;

    /// Build both claim sets and sign each with its configured expiry.
    fn get_auth_token(&self, user: &UserIdentity) -> AppResult<AuthTokenOutput>;
}

/// Concrete auth service over the collaborator traits.
pub struct Authenticator {
    users: Arc<dyn UserService>,
    signer: Arc<dyn TokenSigner>,
    jwt: JwtConfig,
}

impl Authenticator {
    /// Create a new auth service with its collaborators.
    pub fn new(users: Arc<dyn UserService>, signer: Arc<dyn TokenSigner>, jwt: JwtConfig) -> Self {
        Self { users, signer, jwt }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn validate_user(&self, username: String, password: String) -> AppResult<UserIdentity> {
        self.users
            .validate_username_password(username, password)
            .await
    }

    fn login(&self, user: &UserIdentity) -> AppResult<AuthTokenOutput> {
        self.get_auth_token(user)
    }

    async fn register(&self, input: CreateUserInput) -> AppResult<UserResponse> {
        self.users.create_user(input).await
    }

    async fn refresh_token(&self, user_id: Uuid) -> AppResult<AuthTokenOutput> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        self.get_auth_token(&user)
    }

    fn get_auth_token(&self, user: &UserIdentity) -> AppResult<AuthTokenOutput> {
        // Refresh tokens carry the subject only; access tokens carry
        // the full claims view.
        let subject = json!({ "sub": user.id });
        let payload = json!({
            "sub": user.id,
            "username": user.username,
            "roles": user.roles,
        });

        Ok(AuthTokenOutput {
            refresh_token: self
                .signer
                .sign(subject, self.jwt.refresh_token_expires_in_secs)?,
            access_token: self
                .signer
                .sign(payload, self.jwt.access_token_expires_in_secs)?,
        })
    }
}
