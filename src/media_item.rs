//! Media items and the metadata hanging off them.

use std::{fmt, str::FromStr};

use log::{debug, warn};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{
    decode::{impl_resource, Decode, Field, Object},
    duration::Duration,
    error::{Error, Result},
    int64,
    timestamp::{self, Timestamp},
};

/// A photo or video in the user's library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link to the item in the Photos web UI, only viewable by the owner
    pub product_url: String,
    /// Short-lived url for the bytes; append `=d` / `=dv` to download
    pub base_url: String,
    pub mime_type: String,
    pub media_metadata: MediaMetadata,
    /// Only set for items in a shared album the user did not add themselves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_info: Option<ContributorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl MediaItem {
    pub fn is_photo(&self) -> bool {
        matches!(self.media_metadata.media_type, MediaType::Photo(_))
    }

    pub fn is_video(&self) -> bool {
        matches!(self.media_metadata.media_type, MediaType::Video(_))
    }

    /// Whether the bytes behind `base_url` can be fetched. Photos always can,
    /// videos only once the service has finished processing them.
    pub fn is_ready(&self) -> bool {
        match &self.media_metadata.media_type {
            MediaType::Photo(_) => true,
            MediaType::Video(video) => video.status.is_ready(),
        }
    }
}

impl Decode for MediaItem {
    const TYPE_NAME: &'static str = "MediaItem";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            id: object.required("id")?,
            description: object.optional("description")?,
            product_url: object.required("productUrl")?,
            base_url: object.required("baseUrl")?,
            mime_type: object.required("mimeType")?,
            media_metadata: object.required("mediaMetadata")?,
            contributor_info: object.optional("contributorInfo")?,
            filename: object.optional("filename")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorInfo {
    pub profile_picture_base_url: String,
    pub display_name: String,
}

impl Decode for ContributorInfo {
    const TYPE_NAME: &'static str = "ContributorInfo";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            profile_picture_base_url: object.required("profilePictureBaseUrl")?,
            display_name: object.required("displayName")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    #[serde(serialize_with = "timestamp::serialize")]
    pub creation_time: Timestamp,
    #[serde(serialize_with = "int64::serialize")]
    pub width: i64,
    #[serde(serialize_with = "int64::serialize")]
    pub height: i64,
    /// Written back out as a `photo` or `video` key
    #[serde(flatten)]
    pub media_type: MediaType,
}

/// Which of the mutually exclusive `photo` / `video` objects a metadata
/// payload carried.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    Photo(Photo),
    Video(Video),
}

impl MediaType {
    /// `photo` is tried first, so a payload carrying both keys is a photo. If
    /// the `photo` object does not decode, `video` is tried next; when neither
    /// yields a value the metadata is unrecognized.
    fn decode(object: &Object<'_>) -> Result<Self> {
        if object.contains("photo") {
            match object.required::<Photo>("photo") {
                Ok(photo) => {
                    if object.contains("video") {
                        warn!("media metadata has both photo and video details, keeping the photo");
                    }
                    return Ok(Self::Photo(photo));
                }
                Err(e) => debug!("photo details did not decode, trying video: {}", e),
            }
        }

        if object.contains("video") {
            match object.required::<Video>("video") {
                Ok(video) => return Ok(Self::Video(video)),
                Err(e) => debug!("video details did not decode: {}", e),
            }
        }

        Err(Error::UnrecognizedMediaType)
    }
}

impl Decode for MediaMetadata {
    const TYPE_NAME: &'static str = "MediaMetadata";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            creation_time: object.required("creationTime")?,
            width: object.required("width")?,
            height: object.required("height")?,
            media_type: MediaType::decode(object)?,
        })
    }
}

/// Camera details for a photo. The service leaves out anything the camera
/// did not record, so every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aperture_f_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_equivalent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<Duration>,
}

impl Decode for Photo {
    const TYPE_NAME: &'static str = "Photo";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            camera_make: object.optional("cameraMake")?,
            camera_model: object.optional("cameraModel")?,
            focal_length: object.optional("focalLength")?,
            aperture_f_number: object.optional("apertureFNumber")?,
            iso_equivalent: object.optional("isoEquivalent")?,
            exposure_time: object.optional("exposureTime")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    pub status: VideoProcessingStatus,
}

impl Decode for Video {
    const TYPE_NAME: &'static str = "Video";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            camera_make: object.optional("cameraMake")?,
            camera_model: object.optional("cameraModel")?,
            fps: object.optional("fps")?,
            status: object.or_default("status")?,
        })
    }
}

/// Processing state of an uploaded video.
///
/// The set is closed: a value the service adds later fails to decode with
/// [`Error::UnrecognizedEnumValue`] instead of being guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VideoProcessingStatus {
    #[default]
    Unspecified,
    Processing,
    Ready,
    Failed,
}

impl VideoProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoProcessingStatus::Unspecified => "UNSPECIFIED",
            VideoProcessingStatus::Processing => "PROCESSING",
            VideoProcessingStatus::Ready => "READY",
            VideoProcessingStatus::Failed => "FAILED",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, VideoProcessingStatus::Ready)
    }

    /// No further transitions are expected from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            VideoProcessingStatus::Ready | VideoProcessingStatus::Failed
        )
    }
}

impl fmt::Display for VideoProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoProcessingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "UNSPECIFIED" => Ok(VideoProcessingStatus::Unspecified),
            "PROCESSING" => Ok(VideoProcessingStatus::Processing),
            "READY" => Ok(VideoProcessingStatus::Ready),
            "FAILED" => Ok(VideoProcessingStatus::Failed),
            _ => Err(Error::UnrecognizedEnumValue {
                raw: s.to_owned(),
                enum_name: "VideoProcessingStatus",
            }),
        }
    }
}

impl Serialize for VideoProcessingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VideoProcessingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl Field for VideoProcessingStatus {
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        value
            .as_str()
            .ok_or(Error::TypeMismatch {
                field,
                expected: "string",
            })?
            .parse()
    }
}

impl_resource!(MediaItem, ContributorInfo, MediaMetadata, Photo, Video);
