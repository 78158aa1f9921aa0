use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cast_member::CastMember as DomainCastMember;
use crate::domain::types::{CastMemberId, TypeConstraintError};

/// Diesel model representing the `cast_members` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::cast_members)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub member_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::cast_members)]
pub struct NewCastMember<'a> {
    pub name: &'a str,
    pub member_type: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<CastMember> for DomainCastMember {
    type Error = TypeConstraintError;

    fn try_from(member: CastMember) -> Result<Self, Self::Error> {
        let member_type = member
            .member_type
            .parse()
            .map_err(|_| TypeConstraintError::InvalidValue(member.member_type.clone()))?;
        Ok(Self {
            id: Some(CastMemberId::new(member.id)?),
            name: member.name,
            member_type,
            created_at: member.created_at,
            updated_at: member.updated_at,
        })
    }
}

impl<'a> From<&'a DomainCastMember> for NewCastMember<'a> {
    fn from(member: &'a DomainCastMember) -> Self {
        Self {
            name: &member.name,
            member_type: member.member_type.as_str(),
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}
