//! Domain layer - Core entities, claim views, and input schemas.
//!
//! Contains the user entity owned by the user store, the claims view
//! consumed by the auth service, and the registration input schema
//! with its boundary validation rules.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{CreateUserInput, User, UserIdentity, UserResponse, UserRole};
