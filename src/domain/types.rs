//! Strongly-typed identifiers used by domain entities.
//!
//! Aggregates refer to each other through these wrappers instead of raw
//! integers, so a genre can never be handed a cast member id by accident and
//! non-positive identifiers are rejected at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A persisted enum discriminator did not match any known variant.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i64> for $name {
            fn eq(&self, other: &i64) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i64 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);
id_newtype!(
    CastMemberId,
    "Unique identifier for a cast member.",
    "cast_member_id"
);
id_newtype!(GenreId, "Unique identifier for a genre.", "genre_id");
id_newtype!(VideoId, "Unique identifier for a video.", "video_id");
id_newtype!(
    MediaId,
    "Unique identifier for a persisted media row.",
    "media_id"
);

/// Converts a list of raw identifiers, failing on the first non-positive one.
pub fn parse_ids<T>(values: &[i64]) -> Result<Vec<T>, TypeConstraintError>
where
    T: TryFrom<i64, Error = TypeConstraintError>,
{
    values.iter().copied().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_ids() {
        let err = CategoryId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("category_id"));
        assert!(GenreId::new(-4).is_err());
    }

    #[test]
    fn compares_with_raw_integers() {
        let id = VideoId::new(42).unwrap();
        assert_eq!(id, 42);
        assert_eq!(42, id);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn parses_id_lists() {
        let ids: Vec<CastMemberId> = parse_ids(&[3, 1, 2]).unwrap();
        assert_eq!(ids, vec![3_i64, 1, 2]);

        let err = parse_ids::<CastMemberId>(&[3, 0]).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("cast_member_id"));
    }
}
