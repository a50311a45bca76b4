//! Application services layer.
//!
//! The auth service orchestrates two collaborators behind traits:
//! the user store ([`UserService`]) owns credentials and user records,
//! the token signer ([`TokenSigner`]) owns signing and verification.
//! Concrete implementations live alongside the traits.

mod auth_service;
mod token_service;
mod user_service;

pub use auth_service::{AuthService, AuthTokenOutput, Authenticator};
pub use token_service::{AccessTokenClaims, JwtSigner, RefreshTokenClaims, TokenSigner};
pub use user_service::{UserManager, UserService};
