use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::domain::cast_member::CastMember;
use crate::domain::category::Category;
use crate::domain::genre::Genre;
use crate::domain::pagination::{Pagination, SearchQuery, SortColumn, SortDirection};
use crate::domain::types::{CastMemberId, CategoryId, GenreId, MediaId, VideoId};
use crate::domain::video::Video;
use crate::repository::{
    CastMemberReader, CastMemberWriter, CategoryReader, CategoryWriter, GenreReader, GenreWriter,
    RepositoryError, RepositoryResult, VideoReader, VideoWriter,
};

/// Simple in-memory repository used for unit tests.
///
/// Every gateway call is counted by method name, and any method can be made
/// to fail with [`TestRepository::fail_on`].
pub struct TestRepository {
    categories: RefCell<Vec<Category>>,
    cast_members: RefCell<Vec<CastMember>>,
    genres: RefCell<Vec<Genre>>,
    videos: RefCell<Vec<Video>>,
    next_id: Cell<i64>,
    calls: RefCell<HashMap<&'static str, usize>>,
    failures: RefCell<HashSet<&'static str>>,
}

impl Default for TestRepository {
    fn default() -> Self {
        Self {
            categories: RefCell::default(),
            cast_members: RefCell::default(),
            genres: RefCell::default(),
            videos: RefCell::default(),
            next_id: Cell::new(1),
            calls: RefCell::default(),
            failures: RefCell::default(),
        }
    }
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.bump_past(categories.iter().filter_map(|c| c.id.map(i64::from)));
        self.categories.replace(categories);
        self
    }

    pub fn with_cast_members(self, cast_members: Vec<CastMember>) -> Self {
        self.bump_past(cast_members.iter().filter_map(|c| c.id.map(i64::from)));
        self.cast_members.replace(cast_members);
        self
    }

    pub fn with_genres(self, genres: Vec<Genre>) -> Self {
        self.bump_past(genres.iter().filter_map(|g| g.id.map(i64::from)));
        self.genres.replace(genres);
        self
    }

    pub fn with_videos(self, videos: Vec<Video>) -> Self {
        self.bump_past(videos.iter().filter_map(|v| v.id.map(i64::from)));
        self.videos.replace(videos);
        self
    }

    /// Makes every later call to `method` return a database error.
    pub fn fail_on(self, method: &'static str) -> Self {
        self.failures.borrow_mut().insert(method);
        self
    }

    /// Number of times `method` was called.
    pub fn calls(&self, method: &str) -> usize {
        self.calls.borrow().get(method).copied().unwrap_or(0)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.borrow().clone()
    }

    pub fn cast_members(&self) -> Vec<CastMember> {
        self.cast_members.borrow().clone()
    }

    pub fn genres(&self) -> Vec<Genre> {
        self.genres.borrow().clone()
    }

    pub fn videos(&self) -> Vec<Video> {
        self.videos.borrow().clone()
    }

    fn bump_past(&self, ids: impl Iterator<Item = i64>) {
        if let Some(max) = ids.max() {
            self.next_id.set(self.next_id.get().max(max + 1));
        }
    }

    fn next_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn record(&self, method: &'static str) -> RepositoryResult<()> {
        *self.calls.borrow_mut().entry(method).or_default() += 1;
        if self.failures.borrow().contains(method) {
            return Err(RepositoryError::Database(format!("{method} failed")));
        }
        Ok(())
    }
}

fn matches_term(value: &str, term: &str) -> bool {
    term.is_empty() || value.to_lowercase().contains(&term.to_lowercase())
}

fn paginate<T: Clone>(query: &SearchQuery, items: Vec<T>) -> Pagination<T> {
    let total = items.len() as i64;
    let items = items
        .into_iter()
        .skip(query.offset().max(0) as usize)
        .take(query.limit().max(0) as usize)
        .collect();
    Pagination::new(query.page, query.per_page, total, items)
}

fn existing<T, U>(stored: &[T], requested: &[U], id_of: impl Fn(&T) -> Option<U>) -> Vec<U>
where
    U: Copy + Ord,
{
    let mut found: Vec<U> = stored
        .iter()
        .filter_map(id_of)
        .filter(|id| requested.contains(id))
        .collect();
    found.sort();
    found.dedup();
    found
}

impl CategoryReader for TestRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        self.record("get_category_by_id")?;
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|c| c.id == Some(id))
            .cloned())
    }

    fn list_categories(&self, query: &SearchQuery) -> RepositoryResult<Pagination<Category>> {
        self.record("list_categories")?;
        let term = query.term.trim();
        let mut items: Vec<Category> = self
            .categories
            .borrow()
            .iter()
            .filter(|c| matches_term(&c.name, term) || matches_term(&c.description, term))
            .cloned()
            .collect();
        match query.sort_column()? {
            SortColumn::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
            SortColumn::Description => items.sort_by(|a, b| a.description.cmp(&b.description)),
        }
        if query.sort_direction()? == SortDirection::Desc {
            items.reverse();
        }
        Ok(paginate(query, items))
    }

    fn existing_category_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<CategoryId>> {
        self.record("existing_category_ids")?;
        Ok(existing(self.categories.borrow().as_slice(), ids, |c| c.id))
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<CategoryId> {
        self.record("create_category")?;
        let id = CategoryId::new(self.next_id()).map_err(|_| RepositoryError::MissingId)?;
        self.categories
            .borrow_mut()
            .push(category.clone().with_id(id));
        Ok(id)
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<usize> {
        self.record("update_category")?;
        let id = category.id.ok_or(RepositoryError::MissingId)?;
        let mut categories = self.categories.borrow_mut();
        match categories.iter_mut().find(|c| c.id == Some(id)) {
            Some(stored) => {
                *stored = category.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        self.record("delete_category")?;
        let mut categories = self.categories.borrow_mut();
        let before = categories.len();
        categories.retain(|c| c.id != Some(id));
        Ok(before - categories.len())
    }
}

impl CastMemberReader for TestRepository {
    fn get_cast_member_by_id(&self, id: CastMemberId) -> RepositoryResult<Option<CastMember>> {
        self.record("get_cast_member_by_id")?;
        Ok(self
            .cast_members
            .borrow()
            .iter()
            .find(|c| c.id == Some(id))
            .cloned())
    }

    fn list_cast_members(&self, query: &SearchQuery) -> RepositoryResult<Pagination<CastMember>> {
        self.record("list_cast_members")?;
        let term = query.term.trim();
        let mut items: Vec<CastMember> = self
            .cast_members
            .borrow()
            .iter()
            .filter(|c| matches_term(&c.name, term))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        if query.sort_direction()? == SortDirection::Desc {
            items.reverse();
        }
        Ok(paginate(query, items))
    }

    fn existing_cast_member_ids(
        &self,
        ids: &[CastMemberId],
    ) -> RepositoryResult<Vec<CastMemberId>> {
        self.record("existing_cast_member_ids")?;
        Ok(existing(self.cast_members.borrow().as_slice(), ids, |c| c.id))
    }
}

impl CastMemberWriter for TestRepository {
    fn create_cast_member(&self, cast_member: &CastMember) -> RepositoryResult<CastMemberId> {
        self.record("create_cast_member")?;
        let id = CastMemberId::new(self.next_id()).map_err(|_| RepositoryError::MissingId)?;
        self.cast_members
            .borrow_mut()
            .push(cast_member.clone().with_id(id));
        Ok(id)
    }

    fn update_cast_member(&self, cast_member: &CastMember) -> RepositoryResult<usize> {
        self.record("update_cast_member")?;
        let id = cast_member.id.ok_or(RepositoryError::MissingId)?;
        let mut members = self.cast_members.borrow_mut();
        match members.iter_mut().find(|c| c.id == Some(id)) {
            Some(stored) => {
                *stored = cast_member.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_cast_member(&self, id: CastMemberId) -> RepositoryResult<usize> {
        self.record("delete_cast_member")?;
        let mut members = self.cast_members.borrow_mut();
        let before = members.len();
        members.retain(|c| c.id != Some(id));
        Ok(before - members.len())
    }
}

impl GenreReader for TestRepository {
    fn get_genre_by_id(&self, id: GenreId) -> RepositoryResult<Option<Genre>> {
        self.record("get_genre_by_id")?;
        Ok(self
            .genres
            .borrow()
            .iter()
            .find(|g| g.id == Some(id))
            .cloned())
    }

    fn list_genres(&self) -> RepositoryResult<Vec<Genre>> {
        self.record("list_genres")?;
        let mut genres = self.genres.borrow().clone();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    fn existing_genre_ids(&self, ids: &[GenreId]) -> RepositoryResult<Vec<GenreId>> {
        self.record("existing_genre_ids")?;
        Ok(existing(self.genres.borrow().as_slice(), ids, |g| g.id))
    }
}

impl GenreWriter for TestRepository {
    fn create_genre(&self, genre: &Genre) -> RepositoryResult<GenreId> {
        self.record("create_genre")?;
        let id = GenreId::new(self.next_id()).map_err(|_| RepositoryError::MissingId)?;
        self.genres.borrow_mut().push(genre.clone().with_id(id));
        Ok(id)
    }

    fn update_genre(&self, genre: &Genre) -> RepositoryResult<usize> {
        self.record("update_genre")?;
        let id = genre.id.ok_or(RepositoryError::MissingId)?;
        let mut genres = self.genres.borrow_mut();
        match genres.iter_mut().find(|g| g.id == Some(id)) {
            Some(stored) => {
                *stored = genre.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_genre(&self, id: GenreId) -> RepositoryResult<usize> {
        self.record("delete_genre")?;
        let mut genres = self.genres.borrow_mut();
        let before = genres.len();
        genres.retain(|g| g.id != Some(id));
        Ok(before - genres.len())
    }
}

impl VideoReader for TestRepository {
    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        self.record("get_video_by_id")?;
        Ok(self
            .videos
            .borrow()
            .iter()
            .find(|v| v.id == Some(id))
            .cloned())
    }
}

impl VideoWriter for TestRepository {
    fn create_video(&self, video: &Video) -> RepositoryResult<Video> {
        self.record("create_video")?;
        let mut saved = video.clone();
        let media_id = || MediaId::new(self.next_id()).map_err(|_| RepositoryError::MissingId);
        for media in [saved.video.as_mut(), saved.trailer.as_mut()]
            .into_iter()
            .flatten()
        {
            media.id = Some(media_id()?);
        }
        for media in [
            saved.banner.as_mut(),
            saved.thumbnail.as_mut(),
            saved.thumbnail_half.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            media.id = Some(media_id()?);
        }
        saved.id = Some(VideoId::new(self.next_id()).map_err(|_| RepositoryError::MissingId)?);
        self.videos.borrow_mut().push(saved.clone());
        Ok(saved)
    }

    fn delete_video(&self, id: VideoId) -> RepositoryResult<usize> {
        self.record("delete_video")?;
        let mut videos = self.videos.borrow_mut();
        let before = videos.len();
        videos.retain(|v| v.id != Some(id));
        Ok(before - videos.len())
    }
}
