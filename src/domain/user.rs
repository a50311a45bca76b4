//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User roles enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::User => write!(f, "USER"),
            UserRole::Admin => write!(f, "ADMIN"),
        }
    }
}

/// User domain entity, owned by the user store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: Vec<UserRole>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record.
    pub fn new(
        id: Uuid,
        name: String,
        username: String,
        password_hash: String,
        roles: Vec<UserRole>,
    ) -> Self {
        Self {
            id,
            name,
            username,
            password_hash,
            roles,
            created_at: Utc::now(),
        }
    }

    /// Claims view of this user (what gets embedded in tokens).
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            username: self.username.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// Claims view of a user: the attributes echoed into token payloads.
///
/// Constructed per call and discarded after signing; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserIdentity {
    /// Unique user identifier (token `sub`)
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Login name
    #[schema(example = "alice")]
    pub username: String,
    /// Role labels carried into the access token
    pub roles: Vec<UserRole>,
}

impl From<&User> for UserIdentity {
    fn from(user: &User) -> Self {
        user.identity()
    }
}

/// User creation input, validated at the request boundary.
///
/// `username` is only required to be present: an empty string passes,
/// unlike `name` and `password`. `roles` carries no constraint beyond
/// the enum type itself (no whitelist, no non-empty check). Both
/// asymmetries mirror the upstream contract and are pinned by tests.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserInput {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Alice Doe")]
    pub name: String,
    /// Login name
    #[schema(example = "alice")]
    pub username: String,
    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
    /// Role labels assigned at creation
    pub roles: Vec<UserRole>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Display name
    #[schema(example = "Alice Doe")]
    pub name: String,
    /// Login name
    #[schema(example = "alice")]
    pub username: String,
    /// Role labels
    pub roles: Vec<UserRole>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            roles: user.roles,
            created_at: user.created_at,
        }
    }
}
