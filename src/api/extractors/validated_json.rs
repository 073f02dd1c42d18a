//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// JSON body that has passed its `Validate` rules.
///
/// Malformed bodies and rule violations are both reported as 400.
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
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        validate(&value)?;
        Ok(ValidatedJson(value))
    }
}

/// Run the `Validate` rules of a payload built outside of JSON.
pub fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|e| AppError::validation(format_validation_errors(&e)))
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CommentDraft;

    #[test]
    fn test_validate_reports_field_messages() {
        let draft = CommentDraft {
            comentario: String::new(),
            calificacion: 0,
            fecha_comentario: None,
            idemprendimiento: 1,
            idusuarios: 1,
        };

        let message = validate(&draft).unwrap_err().to_string();

        assert!(message.contains("calificacion must be between 1 and 5"));
        assert!(message.contains("comentario is required"));
    }
}
