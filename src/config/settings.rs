//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ACCESS_TOKEN_EXP_SECS, DEFAULT_REFRESH_TOKEN_EXP_SECS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH,
};

/// JWT signing configuration.
///
/// Both expiries are passed through to the token signer per call;
/// the signer owns the actual `exp` claim computation.
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    pub access_token_expires_in_secs: i64,
    pub refresh_token_expires_in_secs: i64,
}

impl JwtConfig {
    pub fn new(
        secret: String,
        access_token_expires_in_secs: i64,
        refresh_token_expires_in_secs: i64,
    ) -> Self {
        Self {
            secret,
            access_token_expires_in_secs,
            refresh_token_expires_in_secs,
        }
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field(
                "access_token_expires_in_secs",
                &self.access_token_expires_in_secs,
            )
            .field(
                "refresh_token_expires_in_secs",
                &self.refresh_token_expires_in_secs,
            )
            .finish()
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub jwt: JwtConfig,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        // Validate JWT secret length
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        Self {
            jwt: JwtConfig::new(
                jwt_secret,
                env::var("JWT_ACCESS_TOKEN_EXP_IN_SEC")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_ACCESS_TOKEN_EXP_SECS),
                env::var("JWT_REFRESH_TOKEN_EXP_IN_SEC")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_REFRESH_TOKEN_EXP_SECS),
            ),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
