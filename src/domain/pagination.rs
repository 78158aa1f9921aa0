//! Search parameters and the paginated result envelope for list operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a [`SearchQuery`] is rejected before reaching a gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchQueryError {
    #[error("invalid page")]
    InvalidPage,
    #[error("perPage should be greater than zero")]
    InvalidPerPage,
    #[error("can only sort by 'name' and 'description'")]
    UnsafeSortColumn(String),
    #[error("invalid direction")]
    InvalidDirection(String),
}

/// Columns a list may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Name,
    Description,
}

impl SortColumn {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Request-shaped list parameters.
///
/// Empty `sort` and `direction` fall back to `name` / `ASC`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub page: i64,
    pub per_page: i64,
    pub term: String,
    pub sort: String,
    pub direction: String,
}

impl SearchQuery {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn sort(mut self, sort: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort = sort.into();
        self.direction = direction.into();
        self
    }

    /// Rows to skip. Saturates instead of overflowing for huge pages.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).max(0).saturating_mul(self.per_page.max(0))
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// Column to order by, restricted to the safe allow-list.
    pub fn sort_column(&self) -> Result<SortColumn, SearchQueryError> {
        match self.sort.as_str() {
            "" | "name" => Ok(SortColumn::Name),
            "description" => Ok(SortColumn::Description),
            other => Err(SearchQueryError::UnsafeSortColumn(other.to_string())),
        }
    }

    pub fn sort_direction(&self) -> Result<SortDirection, SearchQueryError> {
        match self.direction.to_uppercase().as_str() {
            "" | "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(SearchQueryError::InvalidDirection(self.direction.clone())),
        }
    }

    /// Checks every parameter, reporting the first problem found.
    pub fn validate(&self) -> Result<(), SearchQueryError> {
        if self.page < 1 {
            return Err(SearchQueryError::InvalidPage);
        }
        if self.per_page < 1 {
            return Err(SearchQueryError::InvalidPerPage);
        }
        self.sort_column()?;
        self.sort_direction()?;
        Ok(())
    }
}

/// One page of results plus the metadata needed to fetch the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub is_last: bool,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    /// Builds a page, deriving `is_last` from the totals.
    ///
    /// An empty result set counts as a single (last) page.
    pub fn new(current_page: i64, per_page: i64, total: i64, items: Vec<T>) -> Self {
        let total_rows = total.max(0);
        let pages = if per_page > 0 {
            total_rows / per_page + i64::from(total_rows % per_page != 0)
        } else {
            0
        };
        Self {
            current_page,
            per_page,
            total,
            is_last: pages.max(1) == current_page,
            items,
        }
    }

    /// Projects every item, keeping order and page metadata.
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            is_last: self.is_last,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
