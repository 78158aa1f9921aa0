use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::notification::{Validate, ValidationHandler, validate_name};
use crate::domain::types::CategoryId;
use crate::domain::{now, touch};

/// Catalog category. Deactivation is a soft delete stamped in `deleted_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Assigned by the gateway on creation.
    pub id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        let now = now();
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        }
    }

    pub fn with_id(mut self, id: CategoryId) -> Self {
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

    /// Replaces the editable fields, toggling the soft-delete state when
    /// `is_active` differs from the current one.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> &mut Self {
        self.name = name.into();
        self.description = description.into();
        match (self.is_active, is_active) {
            (false, true) => self.activate(),
            (true, false) => self.deactivate(),
            _ => {
                self.updated_at = touch(self.updated_at);
                self
            }
        }
    }
}

impl Validate for Category {
    fn validate<H: ValidationHandler + ?Sized>(&self, handler: &mut H) {
        validate_name(&self.name, handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Notification;

    #[test]
    fn new_category_is_active_and_valid() {
        let category = Category::new("Drinks", "Drinks desc", true);
        let mut notification = Notification::new();
        category.validate(&mut notification);

        assert!(!notification.has_errors());
        assert!(category.id.is_none());
        assert!(category.is_active);
        assert!(category.deleted_at.is_none());
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn new_inactive_category_is_soft_deleted() {
        let category = Category::new("Drinks", "", false);
        assert!(!category.is_active);
        assert!(category.deleted_at.is_some());
    }

    #[test]
    fn deactivate_then_activate_restores_state() {
        let mut category = Category::new("Drinks", "Drinks desc", true);
        let created = category.updated_at;

        category.deactivate();
        let deactivated = category.updated_at;
        assert!(!category.is_active);
        assert!(category.deleted_at.is_some());
        assert!(deactivated > created);

        category.activate();
        assert!(category.is_active);
        assert!(category.deleted_at.is_none());
        assert!(category.updated_at > deactivated);
    }

    #[test]
    fn update_toggles_activation() {
        let mut category = Category::new("Drinks", "desc", true);
        let before = category.updated_at;

        category.update("new Drinks", "Drinks desc", false);
        assert_eq!(category.name, "new Drinks");
        assert_eq!(category.description, "Drinks desc");
        assert!(!category.is_active);
        assert!(category.deleted_at.is_some());
        assert!(category.updated_at > before);

        category.update("new Drinks", "Drinks desc", true);
        assert!(category.is_active);
        assert!(category.deleted_at.is_none());
    }

    #[test]
    fn invalid_name_is_reported() {
        let category = Category::new("32", "desc", true);
        let mut notification = Notification::new();
        category.validate(&mut notification);

        assert_eq!(
            notification.messages(),
            vec!["'name' must be between 3 and 255 characters"]
        );
    }
}
