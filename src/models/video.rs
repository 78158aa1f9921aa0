use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::media::{AudioVideoMedia as DomainAudioVideoMedia, ImageMedia as DomainImageMedia};
use crate::domain::types::{MediaId, TypeConstraintError};
use crate::domain::video::Video as DomainVideo;

/// Diesel model representing the `videos` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::videos)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub opened: bool,
    pub published: bool,
    pub rating: String,
    pub duration: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub video_id: Option<i64>,
    pub trailer_id: Option<i64>,
    pub banner_id: Option<i64>,
    pub thumbnail_id: Option<i64>,
    pub thumbnail_half_id: Option<i64>,
}

/// Insertable form of [`Video`]; media ids come from rows written in the
/// same transaction.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::videos)]
pub struct NewVideo<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub year_launched: i32,
    pub opened: bool,
    pub published: bool,
    pub rating: &'a str,
    pub duration: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub video_id: Option<i64>,
    pub trailer_id: Option<i64>,
    pub banner_id: Option<i64>,
    pub thumbnail_id: Option<i64>,
    pub thumbnail_half_id: Option<i64>,
}

impl<'a> NewVideo<'a> {
    pub fn new(video: &'a DomainVideo) -> Self {
        Self {
            title: &video.title,
            description: &video.description,
            year_launched: video.launched_at,
            opened: video.opened,
            published: video.published,
            rating: video.rating.as_str(),
            duration: video.duration,
            created_at: video.created_at,
            updated_at: video.updated_at,
            video_id: None,
            trailer_id: None,
            banner_id: None,
            thumbnail_id: None,
            thumbnail_half_id: None,
        }
    }
}

/// Diesel model representing the `videos_video_media` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::videos_video_media)]
pub struct VideoMedia {
    pub id: i64,
    pub name: String,
    pub checksum: String,
    pub file_path: String,
    pub encoded_path: String,
    pub media_status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::videos_video_media)]
pub struct NewVideoMedia<'a> {
    pub name: &'a str,
    pub checksum: &'a str,
    pub file_path: &'a str,
    pub encoded_path: &'a str,
    pub media_status: &'a str,
}

impl TryFrom<VideoMedia> for DomainAudioVideoMedia {
    type Error = TypeConstraintError;

    fn try_from(media: VideoMedia) -> Result<Self, Self::Error> {
        let status = media
            .media_status
            .parse()
            .map_err(|_| TypeConstraintError::InvalidValue(media.media_status.clone()))?;
        Ok(Self {
            id: Some(MediaId::new(media.id)?),
            checksum: media.checksum,
            name: media.name,
            raw_location: media.file_path,
            encoded_location: media.encoded_path,
            status,
        })
    }
}

impl<'a> From<&'a DomainAudioVideoMedia> for NewVideoMedia<'a> {
    fn from(media: &'a DomainAudioVideoMedia) -> Self {
        Self {
            name: &media.name,
            checksum: &media.checksum,
            file_path: &media.raw_location,
            encoded_path: &media.encoded_location,
            media_status: media.status.as_str(),
        }
    }
}

/// Diesel model representing the `videos_image_media` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::videos_image_media)]
pub struct ImageMedia {
    pub id: i64,
    pub name: String,
    pub checksum: String,
    pub file_path: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::videos_image_media)]
pub struct NewImageMedia<'a> {
    pub name: &'a str,
    pub checksum: &'a str,
    pub file_path: &'a str,
}

impl TryFrom<ImageMedia> for DomainImageMedia {
    type Error = TypeConstraintError;

    fn try_from(media: ImageMedia) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(MediaId::new(media.id)?),
            checksum: media.checksum,
            name: media.name,
            location: media.file_path,
        })
    }
}

impl<'a> From<&'a DomainImageMedia> for NewImageMedia<'a> {
    fn from(media: &'a DomainImageMedia) -> Self {
        Self {
            name: &media.name,
            checksum: &media.checksum,
            file_path: &media.location,
        }
    }
}

#[derive(Debug, Clone, Copy, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::videos_categories)]
pub struct VideoCategory {
    pub video_id: i64,
    pub category_id: i64,
}

#[derive(Debug, Clone, Copy, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::videos_genres)]
pub struct VideoGenre {
    pub video_id: i64,
    pub genre_id: i64,
}

#[derive(Debug, Clone, Copy, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::videos_cast_members)]
pub struct VideoCastMember {
    pub video_id: i64,
    pub cast_member_id: i64,
}
