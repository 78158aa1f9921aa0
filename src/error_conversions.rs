//! Error conversion glue for `data` feature consumers.
//!
//! The domain layer must not depend on Diesel, so conversions from the
//! persistence error types live here.

use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;

use crate::domain::notification::ValidationError;
use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<DieselError> for RepositoryError {
    fn from(val: DieselError) -> Self {
        match val {
            DieselError::NotFound => RepositoryError::NotFound,
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(val: PoolError) -> Self {
        RepositoryError::Connection(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<ValidationError> for RepositoryError {
    fn from(val: ValidationError) -> Self {
        match val {
            ValidationError::UnknownType { field, value } => {
                RepositoryError::ValidationError(format!("unknown {field}: {value}"))
            }
            other => RepositoryError::ValidationError(other.to_string()),
        }
    }
}

