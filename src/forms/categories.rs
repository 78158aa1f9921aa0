use serde::Deserialize;

use crate::domain::types::CategoryId;
use crate::services::categories::{CreateCategoryCommand, UpdateCategoryCommand};

fn default_active() -> bool {
    true
}

/// Body of `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<CategoryForm> for CreateCategoryCommand {
    fn from(value: CategoryForm) -> Self {
        Self {
            name: value.name,
            description: value.description,
            is_active: value.is_active,
        }
    }
}

impl CategoryForm {
    pub fn into_update(self, id: CategoryId) -> UpdateCategoryCommand {
        UpdateCategoryCommand {
            id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
        }
    }
}
