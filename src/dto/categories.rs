use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::Category;
use crate::dto::raw_id;

/// Full category as returned by a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<Category> for CategoryOutput {
    fn from(value: Category) -> Self {
        Self {
            id: raw_id(value.id),
            name: value.name,
            description: value.description,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
            deleted_at: value.deleted_at,
        }
    }
}

/// Category row of a search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListItem {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryListItem {
    fn from(value: Category) -> Self {
        Self {
            id: raw_id(value.id),
            name: value.name,
            description: value.description,
        }
    }
}
