//! Result payloads returned by the service layer.

use serde::Serialize;

pub mod cast_members;
pub mod categories;
pub mod genres;
pub mod videos;

/// Identifier of a freshly created aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedOutput {
    pub id: i64,
}

impl CreatedOutput {
    pub fn new(id: impl Into<i64>) -> Self {
        Self { id: id.into() }
    }
}

/// Raw value of an optional identifier. Persisted aggregates always carry one.
fn raw_id<T: Into<i64>>(id: Option<T>) -> i64 {
    id.map(Into::into).unwrap_or_default()
}
