use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::category::Category;
use crate::domain::pagination::{Pagination, SearchQuery, SortColumn, SortDirection};
use crate::domain::types::CategoryId;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
    contains_pattern,
};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.get())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn list_categories(&self, query: &SearchQuery) -> RepositoryResult<Pagination<Category>> {
        use crate::schema::categories;

        let sort = query.sort_column()?;
        let direction = query.sort_direction()?;
        let pattern = contains_pattern(query.term.trim());
        let filtered = !query.term.trim().is_empty();

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = categories::table.into_boxed::<Sqlite>();
            if filtered {
                items = items.filter(
                    categories::name
                        .like(pattern.clone())
                        .escape('\\')
                        .or(categories::description.like(pattern.clone()).escape('\\')),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)?;

        let items = match (sort, direction) {
            (SortColumn::Name, SortDirection::Asc) => {
                query_builder().order((categories::name.asc(), categories::id.asc()))
            }
            (SortColumn::Name, SortDirection::Desc) => {
                query_builder().order((categories::name.desc(), categories::id.asc()))
            }
            (SortColumn::Description, SortDirection::Asc) => {
                query_builder().order((categories::description.asc(), categories::id.asc()))
            }
            (SortColumn::Description, SortDirection::Desc) => {
                query_builder().order((categories::description.desc(), categories::id.asc()))
            }
        };

        let items = items
            .offset(query.offset())
            .limit(query.limit())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }

    fn existing_category_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<CategoryId>> {
        use crate::schema::categories;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let raw: Vec<i64> = ids.iter().map(|id| id.get()).collect();

        let found = categories::table
            .filter(categories::id.eq_any(raw))
            .select(categories::id)
            .order(categories::id.asc())
            .load::<i64>(&mut conn)?
            .into_iter()
            .map(CategoryId::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(found)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<CategoryId> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let id = diesel::insert_into(categories::table)
            .values(DbNewCategory::from(category))
            .returning(categories::id)
            .get_result::<i64>(&mut conn)?;

        Ok(CategoryId::new(id)?)
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let id = category.id.ok_or(RepositoryError::MissingId)?;
        let mut conn = self.conn()?;

        let affected = diesel::update(categories::table.find(id.get()))
            .set(DbNewCategory::from(category))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
