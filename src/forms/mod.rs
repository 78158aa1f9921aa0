//! JSON request bodies and query strings accepted by the HTTP API, and their
//! conversion into service commands.

use serde::Deserialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::pagination::SearchQuery;
use crate::domain::types::TypeConstraintError;

pub mod cast_members;
pub mod categories;
pub mod genres;
pub mod videos;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 10;

/// Structural problems with a request body, caught before any use case runs.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("form validation failed: {0}")]
    Validation(String),
    #[error("form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for FormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for FormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Query string of the paginated list endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl From<SearchParams> for SearchQuery {
    fn from(value: SearchParams) -> Self {
        SearchQuery::new(
            value.page.unwrap_or(DEFAULT_PAGE),
            value.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        )
        .term(value.search.unwrap_or_default())
        .sort(value.sort.unwrap_or_default(), value.dir.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_fill_defaults() {
        let query: SearchQuery = SearchParams::default().into();
        assert_eq!(query.page, DEFAULT_PAGE);
        assert_eq!(query.per_page, DEFAULT_ITEMS_PER_PAGE);
        assert!(query.term.is_empty());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn search_params_keep_supplied_values() {
        let params = SearchParams {
            page: Some(2),
            per_page: Some(5),
            search: Some("act".into()),
            sort: Some("description".into()),
            dir: Some("desc".into()),
        };
        let query: SearchQuery = params.into();
        assert_eq!(query.offset(), 5);
        assert_eq!(query.term, "act");
        assert_eq!(query.sort, "description");
        assert_eq!(query.direction, "desc");
    }
}
