//! Media sub-entities owned by a [`Video`](crate::domain::video::Video).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::MediaId;

/// Errors raised by media parsing and lifecycle transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VideoMediaError {
    #[error("unknown video type: {0}")]
    UnknownType(String),
    #[error("unknown media status: {0}")]
    UnknownStatus(String),
    #[error("no {0} media attached")]
    EmptySlot(VideoMediaType),
    #[error("{0} is not an audio/video media")]
    NotAudioVideo(VideoMediaType),
}

/// Encoding progress of an audio/video file.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Pending,
    Processing,
    Completed,
}

impl MediaStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
        }
    }
}

impl Display for MediaStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaStatus {
    type Err = VideoMediaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(VideoMediaError::UnknownStatus(other.to_string())),
        }
    }
}

/// Slot a media item occupies on a video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VideoMediaType {
    Video,
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl VideoMediaType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Trailer => "Trailer",
            Self::Banner => "Banner",
            Self::Thumbnail => "Thumbnail",
            Self::ThumbnailHalf => "Thumbnail_half",
        }
    }

    /// Whether the slot holds an [`AudioVideoMedia`] rather than an image.
    pub const fn is_audio_video(self) -> bool {
        matches!(self, Self::Video | Self::Trailer)
    }
}

impl Display for VideoMediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoMediaType {
    type Err = VideoMediaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Video" => Ok(Self::Video),
            "Trailer" => Ok(Self::Trailer),
            "Banner" => Ok(Self::Banner),
            "Thumbnail" => Ok(Self::Thumbnail),
            "Thumbnail_half" => Ok(Self::ThumbnailHalf),
            other => Err(VideoMediaError::UnknownType(other.to_string())),
        }
    }
}

/// Banner or thumbnail image. Never mutated, only replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageMedia {
    pub id: Option<MediaId>,
    pub checksum: String,
    pub name: String,
    pub location: String,
}

impl ImageMedia {
    pub fn new(
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn with_id(mut self, id: MediaId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Video or trailer file together with its encoding state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioVideoMedia {
    pub id: Option<MediaId>,
    pub checksum: String,
    pub name: String,
    pub raw_location: String,
    pub encoded_location: String,
    pub status: MediaStatus,
}

impl AudioVideoMedia {
    /// Freshly uploaded media, waiting to be encoded.
    pub fn new(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: String::new(),
            status: MediaStatus::Pending,
        }
    }

    pub fn with_id(mut self, id: MediaId) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy of this media marked as being encoded.
    ///
    /// Completed media stay completed.
    pub fn processing(&self) -> Self {
        let status = match self.status {
            MediaStatus::Completed => MediaStatus::Completed,
            _ => MediaStatus::Processing,
        };
        Self {
            status,
            ..self.clone()
        }
    }

    /// Copy of this media marked as encoded at `encoded_path`.
    pub fn completed(&self, encoded_path: impl Into<String>) -> Self {
        Self {
            status: MediaStatus::Completed,
            encoded_location: encoded_path.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_names() {
        assert_eq!(VideoMediaType::ThumbnailHalf.to_string(), "Thumbnail_half");
        assert_eq!(
            "Trailer".parse::<VideoMediaType>(),
            Ok(VideoMediaType::Trailer)
        );
        let err = "Poster".parse::<VideoMediaType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown video type: Poster");
    }

    #[test]
    fn status_names_round_trip() {
        for status in [
            MediaStatus::Pending,
            MediaStatus::Processing,
            MediaStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<MediaStatus>(), Ok(status));
        }
    }

    #[test]
    fn transitions_return_new_values() {
        let media = AudioVideoMedia::new("abc", "movie.mp4", "/raw/movie.mp4");
        assert_eq!(media.status, MediaStatus::Pending);
        assert!(media.encoded_location.is_empty());

        let processing = media.processing();
        assert_eq!(processing.status, MediaStatus::Processing);
        assert_eq!(media.status, MediaStatus::Pending);

        let completed = processing.completed("/encoded/movie");
        assert_eq!(completed.status, MediaStatus::Completed);
        assert_eq!(completed.encoded_location, "/encoded/movie");
        assert_eq!(completed.raw_location, "/raw/movie.mp4");
        assert!(processing.encoded_location.is_empty());
    }

    #[test]
    fn processing_does_not_regress_completed_media() {
        let media = AudioVideoMedia::new("abc", "movie.mp4", "/raw").completed("/enc");
        assert_eq!(media.processing().status, MediaStatus::Completed);
    }
}
