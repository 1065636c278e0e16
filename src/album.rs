use serde::Serialize;
use serde_json::Value;

use crate::{
    decode::{impl_resource, Decode, Field, Object},
    error::{Error, Result},
    int64,
};

/// A named collection of media items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    pub product_url: String,
    /// `"true"` when the caller may add media items to the album; see
    /// [`Album::writeable`]. Empty when the payload left it out.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub is_writeable: String,
    /// Only present once the album has been shared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_info: Option<ShareInfo>,
    #[serde(serialize_with = "int64::serialize")]
    pub total_media_items: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo_media_item_id: Option<String>,
}

impl Album {
    pub fn is_shared(&self) -> bool {
        self.share_info.is_some()
    }

    /// Whether media items can be added to the album.
    pub fn writeable(&self) -> bool {
        self.is_writeable.eq_ignore_ascii_case("true")
    }
}

/// `isWriteable` travels as a string; a JSON boolean is taken as its spelling.
struct WriteableFlag(String);

impl Field for WriteableFlag {
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            Value::Bool(b) => Ok(Self(b.to_string())),
            _ => Err(Error::TypeMismatch {
                field,
                expected: "string",
            }),
        }
    }
}

impl Decode for Album {
    const TYPE_NAME: &'static str = "Album";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            id: object.required("id")?,
            title: object.required("title")?,
            product_url: object.required("productUrl")?,
            is_writeable: object
                .optional::<WriteableFlag>("isWriteable")?
                .map(|flag| flag.0)
                .unwrap_or_default(),
            share_info: object.optional("shareInfo")?,
            total_media_items: object.or_default("totalMediaItems")?,
            cover_photo_base_url: object.optional("coverPhotoBaseUrl")?,
            cover_photo_media_item_id: object.optional("coverPhotoMediaItemId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareInfo {
    pub shared_album_options: SharedAlbumOptions,
    /// Absent unless link sharing is turned on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shareable_url: Option<String>,
    /// Used to join, leave or look up the album on behalf of another user
    pub share_token: String,
    pub is_joined: bool,
    pub is_owned: bool,
}

impl Decode for ShareInfo {
    const TYPE_NAME: &'static str = "ShareInfo";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            shared_album_options: object.required("sharedAlbumOptions")?,
            shareable_url: object.optional("shareableUrl")?,
            share_token: object.required("shareToken")?,
            is_joined: object.or_default("isJoined")?,
            is_owned: object.or_default("isOwned")?,
        })
    }
}

/// Both flags are left out of the payload when false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedAlbumOptions {
    pub is_collaborative: bool,
    pub is_commentable: bool,
}

impl Decode for SharedAlbumOptions {
    const TYPE_NAME: &'static str = "SharedAlbumOptions";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            is_collaborative: object.or_default("isCollaborative")?,
            is_commentable: object.or_default("isCommentable")?,
        })
    }
}

impl_resource!(Album, ShareInfo, SharedAlbumOptions);
