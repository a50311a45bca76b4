//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON extractor that runs schema validation before the handler.
///
/// Constraint failures reject the request with a structured 400
/// validation error; the handler body never runs.
///
/// # Example
///
/// ```rust,ignore
/// use auth_rest_api::api::extractors::ValidatedJson;
/// use auth_rest_api::domain::CreateUserInput;
///
/// async fn register(ValidatedJson(input): ValidatedJson<CreateUserInput>) {
///     // input already passed its declared constraints
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors as `field: message` pairs.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut violations: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();

    // field_errors() iterates a HashMap; sort for stable output.
    violations.sort();
    violations.join("; ")
}
