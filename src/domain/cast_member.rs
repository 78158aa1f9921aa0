use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::notification::{Validate, ValidationError, ValidationHandler, validate_name};
use crate::domain::types::CastMemberId;
use crate::domain::{now, touch};

/// Role a cast member plays in a production.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CastMemberType {
    Actor,
    Director,
}

impl CastMemberType {
    /// String representation used in persistence and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Director => "director",
        }
    }
}

impl Display for CastMemberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CastMemberType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "actor" => Ok(Self::Actor),
            "director" => Ok(Self::Director),
            other => Err(ValidationError::UnknownType {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// Person credited on videos. Deletion is physical, there is no soft delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: Option<CastMemberId>,
    pub name: String,
    pub member_type: CastMemberType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CastMember {
    pub fn new(name: impl Into<String>, member_type: CastMemberType) -> Self {
        let now = now();
        Self {
            id: None,
            name: name.into(),
            member_type,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: CastMemberId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn update(&mut self, name: impl Into<String>, member_type: CastMemberType) -> &mut Self {
        self.name = name.into();
        self.member_type = member_type;
        self.updated_at = touch(self.updated_at);
        self
    }
}

impl Validate for CastMember {
    fn validate<H: ValidationHandler + ?Sized>(&self, handler: &mut H) {
        validate_name(&self.name, handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Notification;

    #[test]
    fn type_round_trips_through_strings() {
        for member_type in [CastMemberType::Actor, CastMemberType::Director] {
            assert_eq!(member_type.as_str().parse::<CastMemberType>(), Ok(member_type));
        }
    }

    #[test]
    fn unknown_type_is_a_validation_error() {
        let err = "producer".parse::<CastMemberType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown type");
    }

    #[test]
    fn update_replaces_fields() {
        let mut member = CastMember::new("Jane", CastMemberType::Actor);
        let before = member.updated_at;

        member.update("Jane Doe", CastMemberType::Director);

        assert_eq!(member.name, "Jane Doe");
        assert_eq!(member.member_type, CastMemberType::Director);
        assert!(member.updated_at > before);
    }

    #[test]
    fn empty_name_reports_two_errors() {
        let member = CastMember::new("", CastMemberType::Actor);
        let mut notification = Notification::new();
        member.validate(&mut notification);
        assert_eq!(notification.errors().len(), 2);
    }
}
