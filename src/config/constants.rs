//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default access token expiration in seconds (1 hour)
pub const DEFAULT_ACCESS_TOKEN_EXP_SECS: i64 = 3600;

/// Default refresh token expiration in seconds (7 days)
pub const DEFAULT_REFRESH_TOKEN_EXP_SECS: i64 = 604_800;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
