use serde::Deserialize;
use validator::Validate;

use crate::domain::types::parse_ids;
use crate::forms::FormError;
use crate::services::videos::{CreateVideoCommand, MediaResource};

/// Descriptor of an already uploaded file.
#[derive(Debug, Deserialize, Validate)]
pub struct MediaForm {
    #[validate(length(min = 1))]
    pub checksum: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
}

impl From<MediaForm> for MediaResource {
    fn from(value: MediaForm) -> Self {
        Self {
            checksum: value.checksum,
            name: value.name,
            location: value.location,
        }
    }
}

/// Body of `POST /videos`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year_launched: i32,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub opened: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default, rename = "memberIds", alias = "castMemberIds")]
    pub cast_member_ids: Vec<i64>,
    #[validate(nested)]
    pub video: Option<MediaForm>,
    #[validate(nested)]
    pub trailer: Option<MediaForm>,
    #[validate(nested)]
    pub banner: Option<MediaForm>,
    #[validate(nested)]
    pub thumbnail: Option<MediaForm>,
    #[validate(nested)]
    pub thumbnail_half: Option<MediaForm>,
}

impl TryFrom<CreateVideoForm> for CreateVideoCommand {
    type Error = FormError;

    fn try_from(value: CreateVideoForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_ids: parse_ids(&value.category_ids)?,
            genre_ids: parse_ids(&value.genre_ids)?,
            cast_member_ids: parse_ids(&value.cast_member_ids)?,
            title: value.title,
            description: value.description,
            launched_at: value.year_launched,
            duration: value.duration,
            opened: value.opened,
            published: value.published,
            rating: value.rating,
            video: value.video.map(Into::into),
            trailer: value.trailer.map(Into::into),
            banner: value.banner.map(Into::into),
            thumbnail: value.thumbnail.map(Into::into),
            thumbnail_half: value.thumbnail_half.map(Into::into),
        })
    }
}
