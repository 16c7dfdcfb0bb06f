use thiserror::Error;

use crate::repository::errors::{RepositoryError, is_slug_conflict};

pub mod category;
pub mod customer;
pub mod main;
pub mod product;

#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("Not authorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Form(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(_) if is_slug_conflict(&err) => {
                ServiceError::Conflict("Slug already exists".to_string())
            }
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            RepositoryError::ValidationError(message) => ServiceError::Form(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
