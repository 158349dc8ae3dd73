use pushkind_common::repository::errors::RepositoryError;
use thiserror::Error;

use crate::clients::product::ProductClientError;

pub mod diagnostics;
pub mod discounts;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload violates a validation rule.
    #[error("{0}")]
    Form(String),
    /// The referenced entity is absent (or unusable, e.g. inactive).
    #[error("{0}")]
    NotFound(String),
    /// The discount store failed.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
    /// The product service failed.
    #[error("product service error: {0}")]
    ProductService(#[from] ProductClientError),
    /// Any other failure that leaves the request unanswerable.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Message returned when a discount id does not resolve.
pub const DISCOUNT_NOT_FOUND: &str = "El descuento no existe.";

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound(DISCOUNT_NOT_FOUND.to_string()),
            other => ServiceError::Repository(other),
        }
    }
}
