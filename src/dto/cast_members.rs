use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::cast_member::CastMember;
use crate::dto::raw_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMemberOutput {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub member_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CastMember> for CastMemberOutput {
    fn from(value: CastMember) -> Self {
        Self {
            id: raw_id(value.id),
            name: value.name,
            member_type: value.member_type.to_string(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMemberListItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub member_type: String,
}

impl From<CastMember> for CastMemberListItem {
    fn from(value: CastMember) -> Self {
        Self {
            id: raw_id(value.id),
            name: value.name,
            member_type: value.member_type.to_string(),
        }
    }
}
