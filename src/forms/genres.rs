use serde::Deserialize;

use crate::domain::types::{GenreId, parse_ids};
use crate::forms::FormError;
use crate::services::genres::{CreateGenreCommand, UpdateGenreCommand};

/// Body of `POST /genres` and `PUT /genres/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreForm {
    pub name: String,
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

impl TryFrom<GenreForm> for CreateGenreCommand {
    type Error = FormError;

    fn try_from(value: GenreForm) -> Result<Self, Self::Error> {
        Ok(Self {
            category_ids: parse_ids(&value.category_ids)?,
            name: value.name,
        })
    }
}

impl GenreForm {
    pub fn into_update(self, id: GenreId) -> Result<UpdateGenreCommand, FormError> {
        Ok(UpdateGenreCommand {
            id,
            category_ids: parse_ids(&self.category_ids)?,
            name: self.name,
        })
    }
}
