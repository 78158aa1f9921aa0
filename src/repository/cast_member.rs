use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::cast_member::CastMember;
use crate::domain::pagination::{Pagination, SearchQuery, SortDirection};
use crate::domain::types::CastMemberId;
use crate::models::cast_member::{CastMember as DbCastMember, NewCastMember as DbNewCastMember};
use crate::repository::{
    CastMemberReader, CastMemberWriter, DieselRepository, RepositoryError, RepositoryResult,
    contains_pattern,
};

impl CastMemberReader for DieselRepository {
    fn get_cast_member_by_id(&self, id: CastMemberId) -> RepositoryResult<Option<CastMember>> {
        use crate::schema::cast_members;

        let mut conn = self.conn()?;

        let member = cast_members::table
            .find(id.get())
            .first::<DbCastMember>(&mut conn)
            .optional()?;

        let member = member.map(TryInto::try_into).transpose()?;
        Ok(member)
    }

    fn list_cast_members(&self, query: &SearchQuery) -> RepositoryResult<Pagination<CastMember>> {
        use crate::schema::cast_members;

        // Cast members have no description; every sort column orders by name.
        query.sort_column()?;
        let direction = query.sort_direction()?;
        let pattern = contains_pattern(query.term.trim());
        let filtered = !query.term.trim().is_empty();

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = cast_members::table.into_boxed::<Sqlite>();
            if filtered {
                items = items.filter(cast_members::name.like(pattern.clone()).escape('\\'));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)?;

        let items = match direction {
            SortDirection::Asc => {
                query_builder().order((cast_members::name.asc(), cast_members::id.asc()))
            }
            SortDirection::Desc => {
                query_builder().order((cast_members::name.desc(), cast_members::id.asc()))
            }
        };

        let items = items
            .offset(query.offset())
            .limit(query.limit())
            .load::<DbCastMember>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CastMember>, _>>()?;

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }

    fn existing_cast_member_ids(
        &self,
        ids: &[CastMemberId],
    ) -> RepositoryResult<Vec<CastMemberId>> {
        use crate::schema::cast_members;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let raw: Vec<i64> = ids.iter().map(|id| id.get()).collect();

        let found = cast_members::table
            .filter(cast_members::id.eq_any(raw))
            .select(cast_members::id)
            .order(cast_members::id.asc())
            .load::<i64>(&mut conn)?
            .into_iter()
            .map(CastMemberId::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(found)
    }
}

impl CastMemberWriter for DieselRepository {
    fn create_cast_member(&self, cast_member: &CastMember) -> RepositoryResult<CastMemberId> {
        use crate::schema::cast_members;

        let mut conn = self.conn()?;

        let id = diesel::insert_into(cast_members::table)
            .values(DbNewCastMember::from(cast_member))
            .returning(cast_members::id)
            .get_result::<i64>(&mut conn)?;

        Ok(CastMemberId::new(id)?)
    }

    fn update_cast_member(&self, cast_member: &CastMember) -> RepositoryResult<usize> {
        use crate::schema::cast_members;

        let id = cast_member.id.ok_or(RepositoryError::MissingId)?;
        let mut conn = self.conn()?;

        let affected = diesel::update(cast_members::table.find(id.get()))
            .set(DbNewCastMember::from(cast_member))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_cast_member(&self, id: CastMemberId) -> RepositoryResult<usize> {
        use crate::schema::cast_members;

        let mut conn = self.conn()?;

        let affected = diesel::delete(cast_members::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
