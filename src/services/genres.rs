use crate::domain::genre::Genre;
use crate::domain::notification::{Notification, Validate, ValidationError, ValidationHandler};
use crate::domain::types::{CategoryId, GenreId};
use crate::dto::CreatedOutput;
use crate::dto::genres::{GenreListItem, GenreOutput};
use crate::repository::{CategoryReader, GenreReader, GenreWriter};

use super::{NotificationResult, ServiceError, ServiceResult, gateway_failure, verify_ids_exist};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGenreCommand {
    pub name: String,
    pub category_ids: Vec<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGenreCommand {
    pub id: GenreId,
    pub name: String,
    pub category_ids: Vec<CategoryId>,
}

fn load_genre<R>(id: GenreId, repo: &R) -> ServiceResult<Genre>
where
    R: GenreReader,
{
    match repo.get_genre_by_id(id) {
        Ok(Some(genre)) => Ok(genre),
        Ok(None) => Err(ServiceError::NotFound("genre".into())),
        Err(e) => {
            log::error!("Failed to get genre {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn store_genre<R>(genre: &Genre, repo: &R) -> ServiceResult<()>
where
    R: GenreWriter,
{
    match repo.update_genre(genre) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update genre: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Validates the name, then the category references, then persists the genre
/// together with its category links.
pub fn create_genre<R>(command: CreateGenreCommand, repo: &R) -> NotificationResult<CreatedOutput>
where
    R: GenreWriter + CategoryReader,
{
    let mut genre = Genre::new(command.name);

    let mut notification = Notification::new();
    genre.validate(&mut notification);
    if notification.has_errors() {
        return Err(notification);
    }

    let missing = verify_ids_exist("category", &command.category_ids, |ids| {
        repo.existing_category_ids(ids)
    });
    if missing.has_errors() {
        return Err(missing);
    }

    genre.add_categories_ids(&command.category_ids);

    match repo.create_genre(&genre) {
        Ok(id) => {
            log::debug!("Created genre {id}");
            Ok(CreatedOutput::new(id))
        }
        Err(e) => Err(gateway_failure("create genre", e)),
    }
}

/// Replaces the name and the category links of a genre.
pub fn update_genre<R>(command: UpdateGenreCommand, repo: &R) -> NotificationResult<()>
where
    R: GenreReader + GenreWriter + CategoryReader,
{
    let mut genre = match repo.get_genre_by_id(command.id) {
        Ok(Some(genre)) => genre,
        Ok(None) => {
            return Err(Notification::with_error(ValidationError::NotFound {
                aggregate: "genre",
            }));
        }
        Err(e) => return Err(gateway_failure("get genre", e)),
    };

    genre.update(command.name);

    let mut notification = Notification::new();
    genre.validate(&mut notification);
    if notification.has_errors() {
        return Err(notification);
    }

    let missing = verify_ids_exist("category", &command.category_ids, |ids| {
        repo.existing_category_ids(ids)
    });
    if missing.has_errors() {
        return Err(missing);
    }

    genre.category_ids.clear();
    genre.add_categories_ids(&command.category_ids);

    match repo.update_genre(&genre) {
        Ok(_) => {
            log::debug!("Updated genre {}", command.id);
            Ok(())
        }
        Err(e) => Err(gateway_failure("update genre", e)),
    }
}

pub fn activate_genre<R>(id: GenreId, repo: &R) -> ServiceResult<()>
where
    R: GenreReader + GenreWriter,
{
    let mut genre = load_genre(id, repo)?;
    genre.activate();
    store_genre(&genre, repo)
}

pub fn deactivate_genre<R>(id: GenreId, repo: &R) -> ServiceResult<()>
where
    R: GenreReader + GenreWriter,
{
    let mut genre = load_genre(id, repo)?;
    genre.deactivate();
    store_genre(&genre, repo)
}

pub fn delete_genre<R>(id: GenreId, repo: &R) -> ServiceResult<()>
where
    R: GenreWriter,
{
    match repo.delete_genre(id) {
        Ok(0) => Err(ServiceError::NotFound("genre".into())),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete genre {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn find_genre_by_id<R>(id: GenreId, repo: &R) -> ServiceResult<GenreOutput>
where
    R: GenreReader,
{
    load_genre(id, repo).map(GenreOutput::from)
}

pub fn list_genres<R>(repo: &R) -> ServiceResult<Vec<GenreListItem>>
where
    R: GenreReader,
{
    match repo.list_genres() {
        Ok(genres) => Ok(genres.into_iter().map(GenreListItem::from).collect()),
        Err(e) => {
            log::error!("Failed to list genres: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::repository::test::TestRepository;

    fn category(id: i64) -> Category {
        Category::new(format!("Category {id}"), "", true).with_id(CategoryId::new(id).unwrap())
    }

    fn category_ids(values: &[i64]) -> Vec<CategoryId> {
        values.iter().map(|v| CategoryId::new(*v).unwrap()).collect()
    }

    fn sample_genre(id: i64, name: &str) -> Genre {
        Genre::new(name).with_id(GenreId::new(id).unwrap())
    }

    #[test]
    fn create_genre_without_categories_skips_existence_check() {
        let repo = TestRepository::new();

        let output = create_genre(
            CreateGenreCommand {
                name: "Action".into(),
                category_ids: vec![],
            },
            &repo,
        )
        .unwrap();

        assert_eq!(output.id, 1);
        assert_eq!(repo.calls("existing_category_ids"), 0);
        assert_eq!(repo.calls("create_genre"), 1);
    }

    #[test]
    fn create_genre_reports_missing_categories() {
        let repo = TestRepository::new().with_categories(vec![category(45), category(59)]);

        let notification = create_genre(
            CreateGenreCommand {
                name: "Action".into(),
                category_ids: category_ids(&[45, 59, 78]),
            },
            &repo,
        )
        .unwrap_err();

        assert_eq!(notification.messages(), vec!["missing category ids: 78"]);
        assert_eq!(repo.calls("create_genre"), 0);
    }

    #[test]
    fn create_genre_with_invalid_name_makes_no_gateway_calls() {
        let repo = TestRepository::new();

        let notification = create_genre(
            CreateGenreCommand {
                name: " ".into(),
                category_ids: category_ids(&[1]),
            },
            &repo,
        )
        .unwrap_err();

        assert_eq!(notification.errors().len(), 2);
        assert_eq!(repo.calls("existing_category_ids"), 0);
        assert_eq!(repo.calls("create_genre"), 0);
    }

    #[test]
    fn create_genre_attaches_categories() {
        let repo = TestRepository::new().with_categories(vec![category(1), category(2)]);

        let output = create_genre(
            CreateGenreCommand {
                name: "Action".into(),
                category_ids: category_ids(&[2, 1]),
            },
            &repo,
        )
        .unwrap();

        let stored = &repo.genres()[0];
        assert_eq!(stored.id.map(i64::from), Some(output.id));
        assert_eq!(stored.category_ids, category_ids(&[2, 1]));
    }

    #[test]
    fn create_genre_existence_failure_is_reported() {
        let repo = TestRepository::new().fail_on("existing_category_ids");

        let notification = create_genre(
            CreateGenreCommand {
                name: "Action".into(),
                category_ids: category_ids(&[1]),
            },
            &repo,
        )
        .unwrap_err();

        assert_eq!(
            notification.messages(),
            vec!["database error: existing_category_ids failed"]
        );
        assert_eq!(repo.calls("create_genre"), 0);
    }

    #[test]
    fn update_genre_replaces_categories() {
        let mut genre = sample_genre(10, "Action");
        genre.add_categories_ids(&category_ids(&[1]));
        let repo = TestRepository::new()
            .with_categories(vec![category(1), category(2)])
            .with_genres(vec![genre]);

        update_genre(
            UpdateGenreCommand {
                id: GenreId::new(10).unwrap(),
                name: "Adventure".into(),
                category_ids: category_ids(&[2]),
            },
            &repo,
        )
        .unwrap();

        let stored = &repo.genres()[0];
        assert_eq!(stored.name, "Adventure");
        assert_eq!(stored.category_ids, category_ids(&[2]));
    }

    #[test]
    fn update_missing_genre_reports_not_found() {
        let repo = TestRepository::new();

        let notification = update_genre(
            UpdateGenreCommand {
                id: GenreId::new(10).unwrap(),
                name: "Adventure".into(),
                category_ids: vec![],
            },
            &repo,
        )
        .unwrap_err();

        assert_eq!(notification.messages(), vec!["genre not found"]);
    }

    #[test]
    fn genre_activation_round_trip() {
        let repo = TestRepository::new().with_genres(vec![sample_genre(3, "Drama")]);
        let id = GenreId::new(3).unwrap();

        deactivate_genre(id, &repo).unwrap();
        assert!(!repo.genres()[0].is_active);

        activate_genre(id, &repo).unwrap();
        assert!(repo.genres()[0].is_active);
        assert!(repo.genres()[0].deleted_at.is_none());
    }

    #[test]
    fn delete_and_find_genre() {
        let repo = TestRepository::new().with_genres(vec![sample_genre(3, "Drama")]);
        let id = GenreId::new(3).unwrap();

        assert_eq!(find_genre_by_id(id, &repo).unwrap().name, "Drama");

        delete_genre(id, &repo).unwrap();
        assert_eq!(
            find_genre_by_id(id, &repo),
            Err(ServiceError::NotFound("genre".into()))
        );
        assert_eq!(
            delete_genre(id, &repo),
            Err(ServiceError::NotFound("genre".into()))
        );
    }

    #[test]
    fn list_genres_maps_items() {
        let mut action = sample_genre(1, "Action");
        action.add_category_id(CategoryId::new(4).unwrap());
        let repo = TestRepository::new().with_genres(vec![sample_genre(2, "Western"), action]);

        let items = list_genres(&repo).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Action");
        assert_eq!(items[0].category_ids, vec![4]);
        assert!(items[0].active);
    }

    #[test]
    fn list_genres_failure_is_internal() {
        let repo = TestRepository::new().fail_on("list_genres");
        assert_eq!(list_genres(&repo), Err(ServiceError::Internal));
    }
}
