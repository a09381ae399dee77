//! Service layer sitting between the HTTP routes and the repository.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod products;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    /// Request is well formed but cannot be processed (HTTP 422).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
