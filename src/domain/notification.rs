//! Error accumulation for aggregate validation.
//!
//! Validators never stop at the first problem: every field check writes into a
//! [`ValidationHandler`] and the caller decides what to do once all checks ran.
//! [`Notification`] is the handler used throughout the service layer and is
//! also the error half of every mutating use case.

use std::fmt::{Display, Formatter};

use thiserror::Error;
use validator::ValidateLength;

/// Initial capacity reserved for a fresh notification.
const NOTIFICATION_CAPACITY: usize = 10;

/// A single business-rule violation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty after trimming.
    #[error("'{field}' should not be empty")]
    Empty { field: &'static str },
    /// Field is absent or empty where a value is mandatory.
    #[error("'{field}' should not be null or empty")]
    Missing { field: &'static str },
    /// Field length is outside of the allowed bounds.
    #[error("'{field}' must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: u64,
        max: u64,
    },
    /// An enum-like value arrived as an unrecognised string.
    #[error("unknown type")]
    UnknownType { field: &'static str, value: String },
    /// Referenced aggregates do not exist.
    #[error("missing {aggregate} ids: {}", join_ids(.ids))]
    MissingIds {
        aggregate: &'static str,
        ids: Vec<i64>,
    },
    /// The aggregate being mutated does not exist.
    #[error("{aggregate} not found")]
    NotFound { aggregate: &'static str },
    /// A gateway call failed while serving a mutation.
    #[error("{0}")]
    Gateway(String),
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl ValidationError {
    /// Field the error refers to, if it is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Empty { field }
            | Self::Missing { field }
            | Self::Length { field, .. }
            | Self::UnknownType { field, .. } => Some(field),
            Self::MissingIds { .. } | Self::NotFound { .. } | Self::Gateway(_) => None,
        }
    }
}

/// Sink for validation errors.
pub trait ValidationHandler {
    /// Records an error.
    fn add(&mut self, error: ValidationError);
    /// Returns `true` when at least one error was recorded.
    fn has_errors(&self) -> bool;
    /// All recorded errors in insertion order.
    fn errors(&self) -> &[ValidationError];
}

/// Entities that can check their own invariants.
pub trait Validate {
    /// Writes every invariant violation into `handler`.
    fn validate<H: ValidationHandler + ?Sized>(&self, handler: &mut H);
}

/// Ordered collection of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self {
            errors: Vec::with_capacity(NOTIFICATION_CAPACITY),
        }
    }

    /// Builds a notification holding exactly one error.
    pub fn with_error(error: ValidationError) -> Self {
        let mut notification = Self::new();
        notification.add(error);
        notification
    }

    /// Moves every error of `other` to the end of this notification.
    pub fn append(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Error messages in insertion order, as shown to API clients.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationHandler for Notification {
    fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for Notification {}

impl From<ValidationError> for Notification {
    fn from(error: ValidationError) -> Self {
        Self::with_error(error)
    }
}

pub const NAME_MIN_LENGTH: u64 = 3;
pub const NAME_MAX_LENGTH: u64 = 255;

/// Shared name rule for categories, cast members and genres.
///
/// Emptiness and length are checked independently, so a blank name reports
/// both errors.
pub fn validate_name<H: ValidationHandler + ?Sized>(name: &str, handler: &mut H) {
    let name = name.trim();
    if name.is_empty() {
        handler.add(ValidationError::Empty { field: "name" });
    }
    if !name.validate_length(Some(NAME_MIN_LENGTH), Some(NAME_MAX_LENGTH), None) {
        handler.add(ValidationError::Length {
            field: "name",
            min: NAME_MIN_LENGTH,
            max: NAME_MAX_LENGTH,
        });
    }
}
