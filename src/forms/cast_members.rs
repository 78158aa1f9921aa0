use serde::Deserialize;

use crate::domain::types::CastMemberId;
use crate::services::cast_members::{CreateCastMemberCommand, UpdateCastMemberCommand};

/// Body of `POST /cast_members` and `PUT /cast_members/{id}`.
#[derive(Debug, Deserialize)]
pub struct CastMemberForm {
    pub name: String,
    #[serde(rename = "type")]
    pub member_type: String,
}

impl From<CastMemberForm> for CreateCastMemberCommand {
    fn from(value: CastMemberForm) -> Self {
        Self {
            name: value.name,
            member_type: value.member_type,
        }
    }
}

impl CastMemberForm {
    pub fn into_update(self, id: CastMemberId) -> UpdateCastMemberCommand {
        UpdateCastMemberCommand {
            id,
            name: self.name,
            member_type: self.member_type,
        }
    }
}
