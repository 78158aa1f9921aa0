use thiserror::Error;

use crate::domain::notification::Notification;
use crate::domain::pagination::SearchQueryError;

/// Plain error channel used by lookups and state flips.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested aggregate was not found.
    #[error("{0} not found")]
    NotFound(String),
    /// List parameters were rejected before reaching the gateway.
    #[error("{0}")]
    InvalidQuery(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl From<SearchQueryError> for ServiceError {
    fn from(val: SearchQueryError) -> Self {
        ServiceError::InvalidQuery(val.to_string())
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result of a mutation whose failures are accumulated validation errors.
pub type NotificationResult<T> = Result<T, Notification>;
