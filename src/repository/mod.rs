//! Gateway contracts consumed by the service layer and their Diesel
//! implementation.

use thiserror::Error;

#[cfg(feature = "data")]
use crate::db::{DbConnection, DbPool};
use crate::domain::cast_member::CastMember;
use crate::domain::category::Category;
use crate::domain::genre::Genre;
use crate::domain::pagination::{Pagination, SearchQuery, SearchQueryError};
use crate::domain::types::{CastMemberId, CategoryId, GenreId, VideoId};
use crate::domain::video::Video;

#[cfg(feature = "data")]
pub mod cast_member;
#[cfg(feature = "data")]
pub mod category;
#[cfg(feature = "data")]
pub mod genre;
#[cfg(test)]
pub mod test;
#[cfg(feature = "data")]
pub mod video;

/// Failures reported by gateway implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The targeted row does not exist.
    #[error("not found")]
    NotFound,
    /// The store rejected or failed a query.
    #[error("database error: {0}")]
    Database(String),
    /// No connection could be obtained.
    #[error("connection error: {0}")]
    Connection(String),
    /// A stored row could not be turned back into a domain value.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// A write was attempted for an aggregate that was never persisted.
    #[error("missing id")]
    MissingId,
}

/// Convenient alias for results returned from gateway calls.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[cfg(feature = "data")]
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

#[cfg(feature = "data")]
impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Search categories by name or description, one page at a time.
    fn list_categories(&self, query: &SearchQuery) -> RepositoryResult<Pagination<Category>>;
    /// Return the subset of `ids` that exist, ascending.
    fn existing_category_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<CategoryId>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return its generated id.
    fn create_category(&self, category: &Category) -> RepositoryResult<CategoryId>;
    /// Store every field of an already persisted category.
    fn update_category(&self, category: &Category) -> RepositoryResult<usize>;
    /// Physically delete a category.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for cast member entities.
pub trait CastMemberReader {
    fn get_cast_member_by_id(&self, id: CastMemberId) -> RepositoryResult<Option<CastMember>>;
    /// Search cast members by name, one page at a time.
    fn list_cast_members(&self, query: &SearchQuery) -> RepositoryResult<Pagination<CastMember>>;
    /// Return the subset of `ids` that exist, ascending.
    fn existing_cast_member_ids(
        &self,
        ids: &[CastMemberId],
    ) -> RepositoryResult<Vec<CastMemberId>>;
}

/// Write operations for cast member entities.
pub trait CastMemberWriter {
    fn create_cast_member(&self, cast_member: &CastMember) -> RepositoryResult<CastMemberId>;
    fn update_cast_member(&self, cast_member: &CastMember) -> RepositoryResult<usize>;
    fn delete_cast_member(&self, id: CastMemberId) -> RepositoryResult<usize>;
}

/// Read-only operations for genre entities.
pub trait GenreReader {
    /// Retrieve a genre together with its category ids.
    fn get_genre_by_id(&self, id: GenreId) -> RepositoryResult<Option<Genre>>;
    /// Every genre ordered by name, with category ids.
    fn list_genres(&self) -> RepositoryResult<Vec<Genre>>;
    /// Return the subset of `ids` that exist, ascending.
    fn existing_genre_ids(&self, ids: &[GenreId]) -> RepositoryResult<Vec<GenreId>>;
}

/// Write operations for genre entities and their category links.
pub trait GenreWriter {
    /// Insert the genre and one link row per category id in one transaction.
    fn create_genre(&self, genre: &Genre) -> RepositoryResult<GenreId>;
    /// Store the genre fields and replace its category links in one
    /// transaction.
    fn update_genre(&self, genre: &Genre) -> RepositoryResult<usize>;
    fn delete_genre(&self, id: GenreId) -> RepositoryResult<usize>;
}

/// Read-only operations for video entities.
pub trait VideoReader {
    /// Retrieve a video with its media and relation ids.
    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>>;
}

/// Write operations for video entities.
pub trait VideoWriter {
    /// Persist media rows, the video row and every relation row in one
    /// transaction. Returns the video with all generated ids filled in.
    fn create_video(&self, video: &Video) -> RepositoryResult<Video>;
    /// Remove the video, its relation rows and its media in one transaction.
    fn delete_video(&self, id: VideoId) -> RepositoryResult<usize>;
}

impl From<SearchQueryError> for RepositoryError {
    fn from(val: SearchQueryError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

/// `LIKE` pattern matching `term` anywhere, with wildcards in `term` escaped
/// by a backslash.
#[cfg(feature = "data")]
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Raw values of `ids` with duplicates removed, keeping first occurrences.
#[cfg(feature = "data")]
fn distinct_ids<T>(ids: &[T]) -> Vec<i64>
where
    T: Copy + Into<i64>,
{
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter()
        .map(|id| (*id).into())
        .filter(|id| seen.insert(*id))
        .collect()
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("act"), "%act%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }
}
