use std::collections::HashMap;

use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::genre::Genre;
use crate::domain::types::GenreId;
use crate::models::genre::{Genre as DbGenre, GenreCategory, NewGenre as DbNewGenre};
use crate::repository::{
    DieselRepository, GenreReader, GenreWriter, RepositoryError, RepositoryResult, distinct_ids,
};

/// Replace every category link of `genre_id` with `category_ids`.
fn replace_genre_categories(
    conn: &mut DbConnection,
    genre_id: i64,
    category_ids: &[i64],
) -> RepositoryResult<()> {
    use crate::schema::genres_categories;

    diesel::delete(genres_categories::table.filter(genres_categories::genre_id.eq(genre_id)))
        .execute(conn)?;

    if category_ids.is_empty() {
        return Ok(());
    }

    let links: Vec<GenreCategory> = category_ids
        .iter()
        .map(|category_id| GenreCategory {
            genre_id,
            category_id: *category_id,
        })
        .collect();

    diesel::insert_into(genres_categories::table)
        .values(&links)
        .execute(conn)?;

    Ok(())
}

impl GenreReader for DieselRepository {
    fn get_genre_by_id(&self, id: GenreId) -> RepositoryResult<Option<Genre>> {
        use crate::schema::{genres, genres_categories};

        let mut conn = self.conn()?;

        let Some(genre) = genres::table
            .find(id.get())
            .first::<DbGenre>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let category_ids = genres_categories::table
            .filter(genres_categories::genre_id.eq(genre.id))
            .select(genres_categories::category_id)
            .order(genres_categories::category_id.asc())
            .load::<i64>(&mut conn)?;

        Ok(Some(genre.into_domain(&category_ids)?))
    }

    fn list_genres(&self) -> RepositoryResult<Vec<Genre>> {
        use crate::schema::{genres, genres_categories};

        let mut conn = self.conn()?;

        let rows = genres::table
            .order((genres::name.asc(), genres::id.asc()))
            .load::<DbGenre>(&mut conn)?;

        let ids: Vec<i64> = rows.iter().map(|genre| genre.id).collect();
        let links = genres_categories::table
            .filter(genres_categories::genre_id.eq_any(ids))
            .order((
                genres_categories::genre_id.asc(),
                genres_categories::category_id.asc(),
            ))
            .load::<GenreCategory>(&mut conn)?;

        let mut by_genre: HashMap<i64, Vec<i64>> = HashMap::new();
        for link in links {
            by_genre
                .entry(link.genre_id)
                .or_default()
                .push(link.category_id);
        }

        let genres = rows
            .into_iter()
            .map(|genre| {
                let category_ids = by_genre.remove(&genre.id).unwrap_or_default();
                genre.into_domain(&category_ids)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(genres)
    }

    fn existing_genre_ids(&self, ids: &[GenreId]) -> RepositoryResult<Vec<GenreId>> {
        use crate::schema::genres;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let raw: Vec<i64> = ids.iter().map(|id| id.get()).collect();

        let found = genres::table
            .filter(genres::id.eq_any(raw))
            .select(genres::id)
            .order(genres::id.asc())
            .load::<i64>(&mut conn)?
            .into_iter()
            .map(GenreId::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(found)
    }
}

impl GenreWriter for DieselRepository {
    fn create_genre(&self, genre: &Genre) -> RepositoryResult<GenreId> {
        use crate::schema::genres;

        let mut conn = self.conn()?;
        let category_ids = distinct_ids(&genre.category_ids);

        let id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let id = diesel::insert_into(genres::table)
                .values(DbNewGenre::from(genre))
                .returning(genres::id)
                .get_result::<i64>(conn)?;

            replace_genre_categories(conn, id, &category_ids)?;
            Ok(id)
        })?;

        Ok(GenreId::new(id)?)
    }

    fn update_genre(&self, genre: &Genre) -> RepositoryResult<usize> {
        use crate::schema::genres;

        let id = genre.id.ok_or(RepositoryError::MissingId)?.get();
        let mut conn = self.conn()?;
        let category_ids = distinct_ids(&genre.category_ids);

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::update(genres::table.find(id))
                .set(DbNewGenre::from(genre))
                .execute(conn)?;

            if affected > 0 {
                replace_genre_categories(conn, id, &category_ids)?;
            }
            Ok(affected)
        })?;

        Ok(affected)
    }

    fn delete_genre(&self, id: GenreId) -> RepositoryResult<usize> {
        use crate::schema::{genres, genres_categories};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(
                genres_categories::table.filter(genres_categories::genre_id.eq(id.get())),
            )
            .execute(conn)?;

            Ok(diesel::delete(genres::table.find(id.get())).execute(conn)?)
        })?;

        Ok(affected)
    }
}
