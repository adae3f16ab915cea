use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors};

/// JSON extractor that runs the `validator` derives before the handler
/// sees the payload. Rejections use the canonical wire error shape.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let status = rejection.status();
                (
                    status,
                    Json(ErrorResponse {
                        message: rejection.body_text(),
                        status: status.as_u16(),
                    }),
                )
            })?;

        value.validate().map_err(|errors| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: format_validation_errors(&errors),
                    status: StatusCode::BAD_REQUEST.as_u16(),
                }),
            )
        })?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::product::CreateProductRequest;

    #[test]
    fn validation_errors_flatten_to_field_messages() {
        let req = CreateProductRequest {
            name: String::new(),
            price: 0.0,
            description: None,
        };

        let errors = req.validate().unwrap_err();
        let message = format_validation_errors(&errors);

        assert!(message.contains("name: Name is required"));
        assert!(message.contains("price: Price must be greater than zero"));
    }
}
