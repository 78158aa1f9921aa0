use crate::domain::media::{AudioVideoMedia, ImageMedia};
use crate::domain::notification::{Notification, Validate, ValidationHandler};
use crate::domain::types::{CastMemberId, CategoryId, GenreId, VideoId};
use crate::domain::video::{Rating, Video};
use crate::dto::CreatedOutput;
use crate::dto::videos::VideoOutput;
use crate::repository::{
    CastMemberReader, CategoryReader, GenreReader, VideoReader, VideoWriter,
};

use super::{NotificationResult, ServiceError, ServiceResult, gateway_failure, verify_ids_exist};

/// Uploaded file referenced by a new video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResource {
    pub checksum: String,
    pub name: String,
    pub location: String,
}

impl MediaResource {
    fn into_audio_video(self) -> AudioVideoMedia {
        AudioVideoMedia::new(self.checksum, self.name, self.location)
    }

    fn into_image(self) -> ImageMedia {
        ImageMedia::new(self.checksum, self.name, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateVideoCommand {
    pub title: String,
    pub description: String,
    pub launched_at: i32,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: String,
    pub category_ids: Vec<CategoryId>,
    pub genre_ids: Vec<GenreId>,
    pub cast_member_ids: Vec<CastMemberId>,
    pub video: Option<MediaResource>,
    pub trailer: Option<MediaResource>,
    pub banner: Option<MediaResource>,
    pub thumbnail: Option<MediaResource>,
    pub thumbnail_half: Option<MediaResource>,
}

/// Creates a video after its rating, fields and references all check out.
///
/// Rating and field errors abort immediately. The three reference checks
/// always run together so every missing id is reported in one go.
pub fn create_video<R>(command: CreateVideoCommand, repo: &R) -> NotificationResult<CreatedOutput>
where
    R: VideoWriter + CategoryReader + GenreReader + CastMemberReader,
{
    let rating: Rating = command.rating.parse().map_err(Notification::with_error)?;

    let mut video = Video::new(
        command.title,
        command.description,
        command.launched_at,
        command.duration,
        rating,
        command.opened,
        command.published,
    )
    .with_relations(
        command.category_ids,
        command.genre_ids,
        command.cast_member_ids,
    );

    let mut notification = Notification::new();
    video.validate(&mut notification);
    if notification.has_errors() {
        return Err(notification);
    }

    notification.append(verify_ids_exist("categories", &video.category_ids, |ids| {
        repo.existing_category_ids(ids)
    }));
    notification.append(verify_ids_exist("genres", &video.genre_ids, |ids| {
        repo.existing_genre_ids(ids)
    }));
    notification.append(verify_ids_exist(
        "cast members",
        &video.cast_member_ids,
        |ids| repo.existing_cast_member_ids(ids),
    ));
    if notification.has_errors() {
        return Err(notification);
    }

    video
        .update_video_media(command.video.map(MediaResource::into_audio_video))
        .update_trailer_media(command.trailer.map(MediaResource::into_audio_video))
        .update_banner_media(command.banner.map(MediaResource::into_image))
        .update_thumbnail_media(command.thumbnail.map(MediaResource::into_image))
        .update_thumbnail_half_media(command.thumbnail_half.map(MediaResource::into_image));

    match repo.create_video(&video) {
        Ok(saved) => match saved.id {
            Some(id) => {
                log::debug!("Created video {id}");
                Ok(CreatedOutput::new(id))
            }
            None => Err(gateway_failure("create video", "no id returned")),
        },
        Err(e) => Err(gateway_failure("create video", e)),
    }
}

pub fn find_video_by_id<R>(id: VideoId, repo: &R) -> ServiceResult<VideoOutput>
where
    R: VideoReader,
{
    match repo.get_video_by_id(id) {
        Ok(Some(video)) => Ok(video.into()),
        Ok(None) => Err(ServiceError::NotFound("video".into())),
        Err(e) => {
            log::error!("Failed to get video {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_video<R>(id: VideoId, repo: &R) -> ServiceResult<()>
where
    R: VideoWriter,
{
    match repo.delete_video(id) {
        Ok(0) => Err(ServiceError::NotFound("video".into())),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete video {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
