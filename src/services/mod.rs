//! Use cases, one module per aggregate.
//!
//! Create and update operations return a [`NotificationResult`] carrying every
//! validation problem found. Lookups and state flips return a
//! [`ServiceResult`].

use std::collections::HashSet;
use std::hash::Hash;

use crate::domain::notification::{Notification, ValidationError, ValidationHandler};
use crate::repository::RepositoryResult;

pub mod cast_members;
pub mod categories;
pub mod errors;
pub mod genres;
pub mod videos;

pub use errors::{NotificationResult, ServiceError, ServiceResult};

/// Checks that every id in `requested` exists according to `lookup`.
///
/// Returns an empty notification when all ids resolve. Missing ids are
/// reported as one error in request order, labelled with `label`. An empty
/// request never calls `lookup`.
pub fn verify_ids_exist<T, F>(label: &'static str, requested: &[T], lookup: F) -> Notification
where
    T: Copy + Eq + Hash + Into<i64>,
    F: FnOnce(&[T]) -> RepositoryResult<Vec<T>>,
{
    let mut notification = Notification::new();
    if requested.is_empty() {
        return notification;
    }

    match lookup(requested) {
        Ok(found) => {
            let found: HashSet<T> = found.into_iter().collect();
            let missing: Vec<i64> = requested
                .iter()
                .filter(|id| !found.contains(id))
                .map(|id| (*id).into())
                .collect();
            if !missing.is_empty() {
                log::warn!("Rejected unknown {label} ids: {missing:?}");
                notification.add(ValidationError::MissingIds {
                    aggregate: label,
                    ids: missing,
                });
            }
        }
        Err(e) => {
            log::error!("Failed to check {label} ids: {e}");
            notification.add(ValidationError::Gateway(e.to_string()));
        }
    }

    notification
}

/// Notification entry for a failed write.
fn gateway_failure(action: &str, error: impl std::fmt::Display) -> Notification {
    log::error!("Failed to {action}: {error}");
    Notification::with_error(ValidationError::Gateway(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CategoryId;
    use crate::repository::RepositoryError;
    use std::cell::Cell;

    fn ids(values: &[i64]) -> Vec<CategoryId> {
        values.iter().map(|v| CategoryId::new(*v).unwrap()).collect()
    }

    #[test]
    fn empty_request_skips_lookup() {
        let calls = Cell::new(0);
        let notification = verify_ids_exist("category", &[] as &[CategoryId], |_| {
            calls.set(calls.get() + 1);
            Ok(vec![])
        });
        assert!(!notification.has_errors());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn reports_missing_ids_in_request_order() {
        let requested = ids(&[78, 45, 90, 59]);
        let notification = verify_ids_exist("category", &requested, |_| Ok(ids(&[45, 59])));
        assert_eq!(notification.messages(), vec!["missing category ids: 78,90"]);
    }

    #[test]
    fn all_found_is_clean() {
        let requested = ids(&[3, 1]);
        let notification = verify_ids_exist("genres", &requested, |_| Ok(ids(&[1, 3])));
        assert!(!notification.has_errors());
    }

    #[test]
    fn lookup_failure_becomes_an_entry() {
        let requested = ids(&[1]);
        let notification = verify_ids_exist("genres", &requested, |_| {
            Err(RepositoryError::Connection("refused".into()))
        });
        assert_eq!(notification.messages(), vec!["connection error: refused"]);
    }
}
