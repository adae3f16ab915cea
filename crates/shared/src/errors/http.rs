use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => HttpError::NotFound(format!("Product not found {id}")),

            ServiceError::Validation(msg) => HttpError::BadRequest(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Sqlx(_) => HttpError::Internal("Database error".into()),
                RepositoryError::Custom(msg) => HttpError::Internal(msg),
            },

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            message: msg,
            status: status.as_u16(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn render(err: ServiceError) -> (StatusCode, Value) {
        let response = HttpError::from(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_renders_404_with_wire_envelope() {
        let (status, body) = render(ServiceError::NotFound(42)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found 42");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn validation_renders_400_with_wire_envelope() {
        let (status, body) =
            render(ServiceError::Validation("Some products were not found".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Some products were not found");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn store_failures_render_500_without_detail_leakage() {
        let (status, body) =
            render(ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::RowNotFound))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Database error");
        assert_eq!(body["status"], 500);
    }
}
