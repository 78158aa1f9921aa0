//! Domain aggregates and the value objects they are built from.

use chrono::{NaiveDateTime, TimeDelta, Utc};

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod media;
pub mod notification;
pub mod pagination;
pub mod types;
pub mod video;

/// Current UTC time.
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Timestamp for a mutation that must sort strictly after `previous`.
///
/// Two mutations inside the same clock tick still get distinct `updated_at`
/// values.
pub(crate) fn touch(previous: NaiveDateTime) -> NaiveDateTime {
    let now = now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}
