use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::media::{AudioVideoMedia, ImageMedia};
use crate::domain::video::Video;
use crate::dto::raw_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioVideoMediaOutput {
    pub id: i64,
    pub checksum: String,
    pub name: String,
    pub raw_location: String,
    pub encoded_location: String,
    pub status: String,
}

impl From<AudioVideoMedia> for AudioVideoMediaOutput {
    fn from(value: AudioVideoMedia) -> Self {
        Self {
            id: raw_id(value.id),
            checksum: value.checksum,
            name: value.name,
            raw_location: value.raw_location,
            encoded_location: value.encoded_location,
            status: value.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageMediaOutput {
    pub id: i64,
    pub checksum: String,
    pub name: String,
    pub location: String,
}

impl From<ImageMedia> for ImageMediaOutput {
    fn from(value: ImageMedia) -> Self {
        Self {
            id: raw_id(value.id),
            checksum: value.checksum,
            name: value.name,
            location: value.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOutput {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub launched_at: i32,
    pub duration: f64,
    pub rating: String,
    pub opened: bool,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub video: Option<AudioVideoMediaOutput>,
    pub trailer: Option<AudioVideoMediaOutput>,
    pub banner: Option<ImageMediaOutput>,
    pub thumbnail: Option<ImageMediaOutput>,
    pub thumbnail_half: Option<ImageMediaOutput>,
    pub category_ids: Vec<i64>,
    pub genre_ids: Vec<i64>,
    pub cast_member_ids: Vec<i64>,
}

impl From<Video> for VideoOutput {
    fn from(value: Video) -> Self {
        Self {
            id: raw_id(value.id),
            title: value.title,
            description: value.description,
            launched_at: value.launched_at,
            duration: value.duration,
            rating: value.rating.to_string(),
            opened: value.opened,
            published: value.published,
            created_at: value.created_at,
            updated_at: value.updated_at,
            video: value.video.map(Into::into),
            trailer: value.trailer.map(Into::into),
            banner: value.banner.map(Into::into),
            thumbnail: value.thumbnail.map(Into::into),
            thumbnail_half: value.thumbnail_half.map(Into::into),
            category_ids: value.category_ids.into_iter().map(i64::from).collect(),
            genre_ids: value.genre_ids.into_iter().map(i64::from).collect(),
            cast_member_ids: value.cast_member_ids.into_iter().map(i64::from).collect(),
        }
    }
}
