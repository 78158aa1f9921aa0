use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::genre::Genre;
use crate::dto::raw_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreOutput {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub category_ids: Vec<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<Genre> for GenreOutput {
    fn from(value: Genre) -> Self {
        Self {
            id: raw_id(value.id),
            name: value.name,
            is_active: value.is_active,
            category_ids: value.category_ids.into_iter().map(i64::from).collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
            deleted_at: value.deleted_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreListItem {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub category_ids: Vec<i64>,
}

impl From<Genre> for GenreListItem {
    fn from(value: Genre) -> Self {
        Self {
            id: raw_id(value.id),
            name: value.name,
            active: value.is_active,
            category_ids: value.category_ids.into_iter().map(i64::from).collect(),
        }
    }
}
