use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::genre::Genre as DomainGenre;
use crate::domain::types::{CategoryId, GenreId, TypeConstraintError};

/// Diesel model representing the `genres` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::genres)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::genres)]
#[diesel(treat_none_as_null = true)]
pub struct NewGenre<'a> {
    pub name: &'a str,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Link row between a genre and a category.
#[derive(Debug, Clone, Copy, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::genres_categories)]
pub struct GenreCategory {
    pub genre_id: i64,
    pub category_id: i64,
}

impl Genre {
    /// Builds the domain genre from this row and its linked category ids.
    pub fn into_domain(self, category_ids: &[i64]) -> Result<DomainGenre, TypeConstraintError> {
        Ok(DomainGenre {
            id: Some(GenreId::new(self.id)?),
            name: self.name,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
            category_ids: category_ids
                .iter()
                .copied()
                .map(CategoryId::new)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl<'a> From<&'a DomainGenre> for NewGenre<'a> {
    fn from(genre: &'a DomainGenre) -> Self {
        Self {
            name: &genre.name,
            is_active: genre.is_active,
            created_at: genre.created_at,
            updated_at: genre.updated_at,
            deleted_at: genre.deleted_at,
        }
    }
}
