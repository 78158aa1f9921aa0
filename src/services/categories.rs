use crate::domain::category::Category;
use crate::domain::notification::{Notification, Validate, ValidationError, ValidationHandler};
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::CategoryId;
use crate::dto::CreatedOutput;
use crate::dto::categories::{CategoryListItem, CategoryOutput};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{NotificationResult, ServiceError, ServiceResult, gateway_failure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

fn load_category<R>(id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound("category".into())),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn store_category<R>(category: &Category, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    match repo.update_category(category) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_category<R>(
    command: CreateCategoryCommand,
    repo: &R,
) -> NotificationResult<CreatedOutput>
where
    R: CategoryWriter,
{
    let category = Category::new(command.name, command.description, command.is_active);

    let mut notification = Notification::new();
    category.validate(&mut notification);
    if notification.has_errors() {
        return Err(notification);
    }

    match repo.create_category(&category) {
        Ok(id) => {
            log::debug!("Created category {id}");
            Ok(CreatedOutput::new(id))
        }
        Err(e) => Err(gateway_failure("create category", e)),
    }
}

pub fn update_category<R>(command: UpdateCategoryCommand, repo: &R) -> NotificationResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let mut category = match repo.get_category_by_id(command.id) {
        Ok(Some(category)) => category,
        Ok(None) => {
            return Err(Notification::with_error(ValidationError::NotFound {
                aggregate: "category",
            }));
        }
        Err(e) => return Err(gateway_failure("get category", e)),
    };

    category.update(command.name, command.description, command.is_active);

    let mut notification = Notification::new();
    category.validate(&mut notification);
    if notification.has_errors() {
        return Err(notification);
    }

    match repo.update_category(&category) {
        Ok(_) => {
            log::debug!("Updated category {}", command.id);
            Ok(())
        }
        Err(e) => Err(gateway_failure("update category", e)),
    }
}

pub fn activate_category<R>(id: CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let mut category = load_category(id, repo)?;
    category.activate();
    store_category(&category, repo)
}

pub fn deactivate_category<R>(id: CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let mut category = load_category(id, repo)?;
    category.deactivate();
    store_category(&category, repo)
}

pub fn delete_category<R>(id: CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    match repo.delete_category(id) {
        Ok(0) => Err(ServiceError::NotFound("category".into())),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn find_category_by_id<R>(id: CategoryId, repo: &R) -> ServiceResult<CategoryOutput>
where
    R: CategoryReader,
{
    load_category(id, repo).map(CategoryOutput::from)
}

pub fn list_categories<R>(
    query: &SearchQuery,
    repo: &R,
) -> ServiceResult<Pagination<CategoryListItem>>
where
    R: CategoryReader,
{
    query.validate()?;

    match repo.list_categories(query) {
        Ok(page) => Ok(page.map(CategoryListItem::from)),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}
