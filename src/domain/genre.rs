use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::notification::{Validate, ValidationHandler, validate_name};
use crate::domain::types::{CategoryId, GenreId};
use crate::domain::{now, touch};

/// Genre aggregate. Owns its many-to-many link to categories as an id list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: Option<GenreId>,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub category_ids: Vec<CategoryId>,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        let now = now();
        Self {
            id: None,
            name: name.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            category_ids: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: GenreId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        let now = touch(self.updated_at);
        self.deleted_at = Some(now);
        self.is_active = false;
        self.updated_at = now;
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.is_active = true;
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn update(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn add_category_id(&mut self, category_id: CategoryId) -> &mut Self {
        self.category_ids.push(category_id);
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn add_categories_ids(&mut self, category_ids: &[CategoryId]) -> &mut Self {
        self.category_ids.extend_from_slice(category_ids);
        self.updated_at = touch(self.updated_at);
        self
    }

    /// Drops the last occurrence of `category_id`. Unknown ids are ignored.
    pub fn remove_category_id(&mut self, category_id: CategoryId) -> &mut Self {
        if let Some(index) = self.category_ids.iter().rposition(|id| *id == category_id) {
            self.category_ids.remove(index);
            self.updated_at = touch(self.updated_at);
        }
        self
    }
}

impl Validate for Genre {
    fn validate<H: ValidationHandler + ?Sized>(&self, handler: &mut H) {
        validate_name(&self.name, handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Notification;

    fn ids(values: &[i64]) -> Vec<CategoryId> {
        values.iter().map(|v| CategoryId::new(*v).unwrap()).collect()
    }

    #[test]
    fn new_genre_has_no_categories() {
        let genre = Genre::new("Action");
        let mut notification = Notification::new();
        genre.validate(&mut notification);

        assert!(!notification.has_errors());
        assert!(genre.is_active);
        assert!(genre.category_ids.is_empty());
    }

    #[test]
    fn adds_categories_in_order() {
        let mut genre = Genre::new("Action");
        genre.add_category_id(CategoryId::new(7).unwrap());
        genre.add_categories_ids(&ids(&[3, 9]));

        assert_eq!(genre.category_ids, ids(&[7, 3, 9]));
    }

    #[test]
    fn removes_last_matching_category() {
        let mut genre = Genre::new("Action");
        genre.add_categories_ids(&ids(&[1, 2, 1, 3]));

        genre.remove_category_id(CategoryId::new(1).unwrap());

        assert_eq!(genre.category_ids, ids(&[1, 2, 3]));
    }

    #[test]
    fn removing_unknown_category_is_a_no_op() {
        let mut genre = Genre::new("Action");
        genre.add_categories_ids(&ids(&[1, 2]));
        let before = genre.updated_at;

        genre.remove_category_id(CategoryId::new(5).unwrap());

        assert_eq!(genre.category_ids, ids(&[1, 2]));
        assert_eq!(genre.updated_at, before);
    }

    #[test]
    fn deactivate_then_activate() {
        let mut genre = Genre::new("Action");
        genre.deactivate();
        assert!(!genre.is_active);
        assert!(genre.deleted_at.is_some());

        genre.activate();
        assert!(genre.is_active);
        assert!(genre.deleted_at.is_none());
    }
}
