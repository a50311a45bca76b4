//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::auth_handler;
use crate::domain::{CreateUserInput, UserIdentity, UserResponse, UserRole};
use crate::services::AuthTokenOutput;

/// OpenAPI documentation for the Auth REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Auth REST API",
        version = "0.1.0",
        description = "Username/password authentication with JWT access and refresh tokens",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        auth_handler::refresh_token,
        auth_handler::me,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserIdentity,
            UserResponse,
            CreateUserInput,
            // Auth types
            auth_handler::LoginRequest,
            auth_handler::RefreshTokenRequest,
            AuthTokenOutput,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and token refresh")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
