//! User store collaborator - credentials and user records.
//!
//! The store owns password hashing and the meaning of "invalid
//! credentials" (unknown user and wrong password are indistinguishable
//! to callers). The auth service only sees the trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{CreateUserInput, Password, User, UserIdentity, UserResponse};
use crate::errors::{AppError, AppResult};

/// User-management contract consumed by the auth service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Check a username/password pair, returning the claims view on
    /// success and InvalidCredentials otherwise.
    async fn validate_username_password(
        &self,
        username: String,
        password: String,
    ) -> AppResult<UserIdentity>;

    /// Look up a user by id; absent users are not an error.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserIdentity>>;

    /// Create a new user from already-validated input.
    async fn create_user(&self, input: CreateUserInput) -> AppResult<UserResponse>;
}

/// In-memory user registry.
///
/// Serves as the concrete user store for the binary and the
/// integration tests; nothing survives a restart.
pub struct UserManager {
    users: RwLock<HashMap<Uuid, User>>,
}

impl UserManager {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for UserManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn validate_username_password(
        &self,
        username: String,
        password: String,
    ) -> AppResult<UserIdentity> {
        let record = {
            let users = self.users.read().await;
            users.values().find(|u| u.username == username).cloned()
        };

        // Verify against a dummy hash when the user is unknown so the
        // response time does not leak which usernames exist.
        const DUMMY_HASH: &str =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let stored = match &record {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::from_hash(DUMMY_HASH.to_string()),
        };
        let password_valid = stored.verify(&password);

        match record {
            Some(user) if password_valid => Ok(user.identity()),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserIdentity>> {
        let users = self.users.read().await;
        Ok(users.get(&id).map(User::identity))
    }

    async fn create_user(&self, input: CreateUserInput) -> AppResult<UserResponse> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == input.username) {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        let user = User::new(
            Uuid::new_v4(),
            input.name,
            input.username,
            password_hash,
            input.roles,
        );

        let response = UserResponse::from(user.clone());
        users.insert(user.id, user);

        Ok(response)
    }
}
