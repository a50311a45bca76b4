//! Token signing collaborator - claims in, signed string out.
//!
//! The signer owns everything cryptographic: algorithm, key material,
//! and the `iat`/`exp` claims. Callers hand over a claims object and
//! a lifetime; they never see a key.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::UserRole;
use crate::errors::{AppError, AppResult};

/// Generic token-signing contract.
///
/// Claims are passed as a JSON object; the signer injects `iat` and
/// `exp` before signing. `verify` checks signature and expiry and
/// returns the full claims object.
#[cfg_attr(test, mockall::automock)]
pub trait TokenSigner: Send + Sync {
    /// Sign a claims object with the given lifetime.
    fn sign(&self, claims: Value, expires_in_secs: i64) -> AppResult<String>;

    /// Verify signature and expiry, returning the decoded claims.
    fn verify(&self, token: &str) -> AppResult<Value>;
}

/// Decoded access-token claims.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenClaims {
    pub sub: Uuid,
    pub username: String,
    pub roles: Vec<UserRole>,
    pub exp: i64,
    pub iat: i64,
}

impl AccessTokenClaims {
    /// Parse verified claims into the typed access-token view.
    ///
    /// A signed token whose claims don't fit this shape is not an
    /// access token, so the failure surfaces as Unauthorized.
    pub fn from_value(claims: Value) -> AppResult<Self> {
        serde_json::from_value(claims).map_err(|_| AppError::Unauthorized)
    }
}

/// Decoded refresh-token claims: subject only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl RefreshTokenClaims {
    /// Parse verified claims into the typed refresh-token view.
    pub fn from_value(claims: Value) -> AppResult<Self> {
        serde_json::from_value(claims).map_err(|_| AppError::Unauthorized)
    }
}

/// HS256 JWT signer over a shared secret.
pub struct JwtSigner {
    config: JwtConfig,
}

impl JwtSigner {
    /// Create a signer from JWT configuration.
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, claims: Value, expires_in_secs: i64) -> AppResult<String> {
        let mut payload = match claims {
            Value::Object(map) => map,
            _ => return Err(AppError::internal("token claims must be a JSON object")),
        };

        let now = Utc::now().timestamp();
        payload.insert("iat".to_string(), Value::from(now));
        payload.insert("exp".to_string(), Value::from(now + expires_in_secs));

        let token = encode(
            &Header::default(),
            &Value::Object(payload),
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )?;

        Ok(token)
    }

    fn verify(&self, token: &str) -> AppResult<Value> {
        let token_data = decode::<Value>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
