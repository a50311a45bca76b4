//! Auth REST API - Username/password authentication backend.
//!
//! Implements a conventional authentication flow: credential
//! validation, issuance of a short-lived access token plus a
//! longer-lived refresh token, user registration, and token refresh.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities, claim views, and input schemas
//! - **services**: Auth orchestration and collaborator contracts
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! The auth service itself holds no algorithm: password hashing lives
//! behind the [`services::UserService`] collaborator and token signing
//! behind the [`services::TokenSigner`] collaborator.
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateUserInput, Password, User, UserIdentity, UserResponse, UserRole};
pub use errors::{AppError, AppResult};
