use crate::domain::cast_member::{CastMember, CastMemberType};
use crate::domain::notification::{Notification, Validate, ValidationError, ValidationHandler};
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::CastMemberId;
use crate::dto::CreatedOutput;
use crate::dto::cast_members::{CastMemberListItem, CastMemberOutput};
use crate::repository::{CastMemberReader, CastMemberWriter};

use super::{NotificationResult, ServiceError, ServiceResult, gateway_failure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCastMemberCommand {
    pub name: String,
    /// `actor` or `director`.
    pub member_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCastMemberCommand {
    pub id: CastMemberId,
    pub name: String,
    pub member_type: String,
}

fn parse_type(value: &str) -> NotificationResult<CastMemberType> {
    value.parse().map_err(Notification::with_error)
}

pub fn create_cast_member<R>(
    command: CreateCastMemberCommand,
    repo: &R,
) -> NotificationResult<CreatedOutput>
where
    R: CastMemberWriter,
{
    let member_type = parse_type(&command.member_type)?;
    let cast_member = CastMember::new(command.name, member_type);

    let mut notification = Notification::new();
    cast_member.validate(&mut notification);
    if notification.has_errors() {
        return Err(notification);
    }

    match repo.create_cast_member(&cast_member) {
        Ok(id) => {
            log::debug!("Created cast member {id}");
            Ok(CreatedOutput::new(id))
        }
        Err(e) => Err(gateway_failure("create cast member", e)),
    }
}

pub fn update_cast_member<R>(command: UpdateCastMemberCommand, repo: &R) -> NotificationResult<()>
where
    R: CastMemberReader + CastMemberWriter,
{
    let mut cast_member = match repo.get_cast_member_by_id(command.id) {
        Ok(Some(cast_member)) => cast_member,
        Ok(None) => {
            return Err(Notification::with_error(ValidationError::NotFound {
                aggregate: "cast member",
            }));
        }
        Err(e) => return Err(gateway_failure("get cast member", e)),
    };

    let member_type = parse_type(&command.member_type)?;
    cast_member.update(command.name, member_type);

    let mut notification = Notification::new();
    cast_member.validate(&mut notification);
    if notification.has_errors() {
        return Err(notification);
    }

    match repo.update_cast_member(&cast_member) {
        Ok(_) => {
            log::debug!("Updated cast member {}", command.id);
            Ok(())
        }
        Err(e) => Err(gateway_failure("update cast member", e)),
    }
}

pub fn delete_cast_member<R>(id: CastMemberId, repo: &R) -> ServiceResult<()>
where
    R: CastMemberWriter,
{
    match repo.delete_cast_member(id) {
        Ok(0) => Err(ServiceError::NotFound("cast member".into())),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete cast member {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn find_cast_member_by_id<R>(id: CastMemberId, repo: &R) -> ServiceResult<CastMemberOutput>
where
    R: CastMemberReader,
{
    match repo.get_cast_member_by_id(id) {
        Ok(Some(cast_member)) => Ok(cast_member.into()),
        Ok(None) => Err(ServiceError::NotFound("cast member".into())),
        Err(e) => {
            log::error!("Failed to get cast member {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_cast_members<R>(
    query: &SearchQuery,
    repo: &R,
) -> ServiceResult<Pagination<CastMemberListItem>>
where
    R: CastMemberReader,
{
    query.validate()?;

    match repo.list_cast_members(query) {
        Ok(page) => Ok(page.map(CastMemberListItem::from)),
        Err(e) => {
            log::error!("Failed to list cast members: {e}");
            Err(ServiceError::Internal)
        }
    }
}
