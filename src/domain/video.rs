use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::ValidateLength;

use crate::domain::media::{AudioVideoMedia, ImageMedia, VideoMediaError, VideoMediaType};
use crate::domain::notification::{Validate, ValidationError, ValidationHandler};
use crate::domain::types::{CastMemberId, CategoryId, GenreId, VideoId};
use crate::domain::{now, touch};

pub const TITLE_MAX_LENGTH: u64 = 255;
pub const DESCRIPTION_MAX_LENGTH: u64 = 4_000;

/// Age rating of a video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rating {
    Er,
    Livre,
    Age10,
    Age12,
    Age14,
    Age16,
    Age18,
}

impl Rating {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Er => "ER",
            Self::Livre => "Livre",
            Self::Age10 => "10",
            Self::Age12 => "12",
            Self::Age14 => "14",
            Self::Age16 => "16",
            Self::Age18 => "18",
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ER" => Ok(Self::Er),
            "Livre" => Ok(Self::Livre),
            "10" => Ok(Self::Age10),
            "12" => Ok(Self::Age12),
            "14" => Ok(Self::Age14),
            "16" => Ok(Self::Age16),
            "18" => Ok(Self::Age18),
            other => Err(ValidationError::UnknownType {
                field: "rating",
                value: other.to_string(),
            }),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Root aggregate of the catalog.
///
/// Exclusively owns its media; replacing a slot drops the previous value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: Option<VideoId>,
    pub title: String,
    pub description: String,
    pub launched_at: i32,
    pub duration: f64,
    pub rating: Rating,
    pub opened: bool,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
    pub video: Option<AudioVideoMedia>,
    pub trailer: Option<AudioVideoMedia>,
    pub category_ids: Vec<CategoryId>,
    pub genre_ids: Vec<GenreId>,
    pub cast_member_ids: Vec<CastMemberId>,
}

impl Video {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: i32,
        duration: f64,
        rating: Rating,
        opened: bool,
        published: bool,
    ) -> Self {
        let now = now();
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            launched_at,
            duration,
            rating,
            opened,
            published,
            created_at: now,
            updated_at: now,
            banner: None,
            thumbnail: None,
            thumbnail_half: None,
            video: None,
            trailer: None,
            category_ids: Vec::new(),
            genre_ids: Vec::new(),
            cast_member_ids: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: VideoId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_relations(
        mut self,
        category_ids: Vec<CategoryId>,
        genre_ids: Vec<GenreId>,
        cast_member_ids: Vec<CastMemberId>,
    ) -> Self {
        self.category_ids = category_ids;
        self.genre_ids = genre_ids;
        self.cast_member_ids = cast_member_ids;
        self
    }

    pub fn update_banner_media(&mut self, banner: Option<ImageMedia>) -> &mut Self {
        self.banner = banner;
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn update_thumbnail_media(&mut self, thumbnail: Option<ImageMedia>) -> &mut Self {
        self.thumbnail = thumbnail;
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn update_thumbnail_half_media(&mut self, thumbnail_half: Option<ImageMedia>) -> &mut Self {
        self.thumbnail_half = thumbnail_half;
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn update_video_media(&mut self, video: Option<AudioVideoMedia>) -> &mut Self {
        self.video = video;
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn update_trailer_media(&mut self, trailer: Option<AudioVideoMedia>) -> &mut Self {
        self.trailer = trailer;
        self.updated_at = touch(self.updated_at);
        self
    }

    /// Audio/video media held in the slot for `kind`, if any.
    pub fn audio_video_media(&self, kind: VideoMediaType) -> Option<&AudioVideoMedia> {
        match kind {
            VideoMediaType::Video => self.video.as_ref(),
            VideoMediaType::Trailer => self.trailer.as_ref(),
            _ => None,
        }
    }

    /// Marks the media in `kind` as being encoded. Empty slots and image
    /// slots are left untouched.
    pub fn processing(&mut self, kind: VideoMediaType) -> &mut Self {
        match kind {
            VideoMediaType::Video => {
                if let Some(media) = self.video.as_ref().map(AudioVideoMedia::processing) {
                    self.update_video_media(Some(media));
                }
            }
            VideoMediaType::Trailer => {
                if let Some(media) = self.trailer.as_ref().map(AudioVideoMedia::processing) {
                    self.update_trailer_media(Some(media));
                }
            }
            _ => {}
        }
        self
    }

    /// Marks the media in `kind` as encoded at `encoded_path`.
    ///
    /// The slot must hold audio/video media.
    pub fn completed(
        &mut self,
        kind: VideoMediaType,
        encoded_path: impl Into<String>,
    ) -> Result<&mut Self, VideoMediaError> {
        if !kind.is_audio_video() {
            return Err(VideoMediaError::NotAudioVideo(kind));
        }
        let media = self
            .audio_video_media(kind)
            .ok_or(VideoMediaError::EmptySlot(kind))?
            .completed(encoded_path);
        Ok(match kind {
            VideoMediaType::Trailer => self.update_trailer_media(Some(media)),
            _ => self.update_video_media(Some(media)),
        })
    }
}

impl Validate for Video {
    fn validate<H: ValidationHandler + ?Sized>(&self, handler: &mut H) {
        if self.title.is_empty() {
            handler.add(ValidationError::Missing { field: "title" });
        }
        if self.description.is_empty() {
            handler.add(ValidationError::Missing {
                field: "description",
            });
        }
        if !self.title.validate_length(None, Some(TITLE_MAX_LENGTH), None) {
            handler.add(ValidationError::Length {
                field: "title",
                min: 1,
                max: TITLE_MAX_LENGTH,
            });
        }
        if !self
            .description
            .validate_length(None, Some(DESCRIPTION_MAX_LENGTH), None)
        {
            handler.add(ValidationError::Length {
                field: "description",
                min: 1,
                max: DESCRIPTION_MAX_LENGTH,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaStatus;
    use crate::domain::notification::Notification;

    fn video() -> Video {
        Video::new("Title", "Description", 2022, 120.5, Rating::Age12, true, true)
    }

    fn errors(video: &Video) -> Vec<String> {
        let mut notification = Notification::new();
        video.validate(&mut notification);
        notification.messages()
    }

    #[test]
    fn rating_strings_round_trip() {
        for rating in [
            Rating::Er,
            Rating::Livre,
            Rating::Age10,
            Rating::Age12,
            Rating::Age14,
            Rating::Age16,
            Rating::Age18,
        ] {
            assert_eq!(rating.as_str().parse::<Rating>(), Ok(rating));
        }
        assert_eq!(Rating::Livre.to_string(), "Livre");
    }

    #[test]
    fn unknown_rating_is_a_validation_error() {
        let err = "L".parse::<Rating>().unwrap_err();
        assert_eq!(err.to_string(), "unknown type");
        assert_eq!(err.field(), Some("rating"));
    }

    #[test]
    fn valid_video_has_no_errors() {
        assert!(errors(&video()).is_empty());
    }

    #[test]
    fn empty_title_and_description_are_reported() {
        let video = Video::new("", "", 2022, 1.0, Rating::Er, false, false);
        assert_eq!(
            errors(&video),
            vec![
                "'title' should not be null or empty",
                "'description' should not be null or empty",
            ]
        );
    }

    #[test]
    fn overlong_fields_are_reported() {
        let video = Video::new(
            "t".repeat(256),
            "d".repeat(4001),
            2022,
            1.0,
            Rating::Er,
            false,
            false,
        );
        assert_eq!(
            errors(&video),
            vec![
                "'title' must be between 1 and 255 characters",
                "'description' must be between 1 and 4000 characters",
            ]
        );
    }

    #[test]
    fn media_lifecycle() {
        let mut video = video();
        video.update_video_media(Some(AudioVideoMedia::new("sum", "movie", "/raw")));

        video.processing(VideoMediaType::Video);
        assert_eq!(
            video.video.as_ref().map(|m| m.status),
            Some(MediaStatus::Processing)
        );

        video.completed(VideoMediaType::Video, "/encoded").unwrap();
        let media = video.video.as_ref().unwrap();
        assert_eq!(media.status, MediaStatus::Completed);
        assert_eq!(media.encoded_location, "/encoded");
    }

    #[test]
    fn processing_on_empty_slot_is_a_no_op() {
        let mut video = video();
        let before = video.updated_at;
        video.processing(VideoMediaType::Trailer);
        assert!(video.trailer.is_none());
        assert_eq!(video.updated_at, before);
    }

    #[test]
    fn completed_requires_audio_video_media() {
        let mut video = video();
        assert_eq!(
            video.completed(VideoMediaType::Trailer, "/enc").unwrap_err(),
            VideoMediaError::EmptySlot(VideoMediaType::Trailer)
        );
        assert_eq!(
            video.completed(VideoMediaType::Banner, "/enc").unwrap_err(),
            VideoMediaError::NotAudioVideo(VideoMediaType::Banner)
        );
    }

    #[test]
    fn replacing_image_media_touches_video() {
        let mut video = video();
        let before = video.updated_at;
        video.update_banner_media(Some(ImageMedia::new("sum", "banner", "/banner.png")));
        assert!(video.updated_at > before);
        assert_eq!(video.banner.as_ref().map(|b| b.name.as_str()), Some("banner"));
    }
}
