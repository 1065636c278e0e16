//! Typed versions of the album and media item resources exposed by the Google
//! Photos Library API, and the rules for moving them in and out of JSON.
//!
//! Nothing in here talks to the network. Hand [`from_slice`] the body of a
//! response and get a typed value back, or hand [`to_string`] a request
//! parameter such as [`AlbumPosition`] and send the result.
//!
//! ```
//! use photos_schema::{from_str, MediaItem, MediaType};
//!
//! let item: MediaItem = from_str(r#"{
//!     "id": "AF1Qip",
//!     "productUrl": "https://photos.google.com/lr/photo/AF1Qip",
//!     "baseUrl": "https://lh3.googleusercontent.com/lr/AF1Qip",
//!     "mimeType": "image/jpeg",
//!     "mediaMetadata": {
//!         "creationTime": "2014-10-02T15:01:23.045123456Z",
//!         "width": "4032",
//!         "height": "3024",
//!         "photo": { "exposureTime": "0.008s" }
//!     }
//! }"#).unwrap();
//!
//! assert!(matches!(item.media_metadata.media_type, MediaType::Photo(_)));
//! ```

pub mod album;
pub mod decode;
pub mod duration;
pub mod error;
pub mod int64;
pub mod media_item;
pub mod position;
pub mod responses;
pub mod timestamp;

pub use album::{Album, ShareInfo, SharedAlbumOptions};
pub use decode::{from_slice, from_str, from_value, to_string, to_value, Decode};
pub use duration::Duration;
pub use error::{Error, Result};
pub use media_item::{
    ContributorInfo, MediaItem, MediaMetadata, MediaType, Photo, Video, VideoProcessingStatus,
};
pub use position::AlbumPosition;
pub use responses::{ListAlbumsResponse, ListMediaItemsResponse, ListSharedAlbumsResponse};
pub use timestamp::Timestamp;
