//! Application state - Dependency injection container.
//!
//! Holds the auth service and the two collaborators it orchestrates.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    AuthService, Authenticator, JwtSigner, TokenSigner, UserManager, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication orchestration
    pub auth_service: Arc<dyn AuthService>,
    /// User store collaborator
    pub user_service: Arc<dyn UserService>,
    /// Token signing collaborator
    pub token_signer: Arc<dyn TokenSigner>,
}

impl AppState {
    /// Create application state from configuration, wiring the
    /// in-memory user store and the HS256 signer.
    pub fn from_config(config: Config) -> Self {
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new());
        let token_signer: Arc<dyn TokenSigner> = Arc::new(JwtSigner::new(config.jwt.clone()));
        let auth_service = Arc::new(Authenticator::new(
            user_service.clone(),
            token_signer.clone(),
            config.jwt,
        ));

        Self {
            auth_service,
            user_service,
            token_signer,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        token_signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            token_signer,
        }
    }
}
