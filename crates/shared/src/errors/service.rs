use crate::errors::repository::RepositoryError;
use thiserror::Error;

/// Canonical domain error. Both transports translate this at their own
/// boundary; neither axum nor RPC error shapes appear below the handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Product not found {0}")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
