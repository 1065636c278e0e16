//! Envelopes the list endpoints wrap their results in. The page token is
//! carried along for the caller; nothing here follows it.

use serde::Serialize;

use crate::{
    album::Album,
    decode::{impl_resource, Decode, Object},
    error::Result,
    media_item::MediaItem,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAlbumsResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub albums: Vec<Album>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl Decode for ListAlbumsResponse {
    const TYPE_NAME: &'static str = "ListAlbumsResponse";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            albums: object.or_default("albums")?,
            next_page_token: object.optional("nextPageToken")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSharedAlbumsResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shared_albums: Vec<Album>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl Decode for ListSharedAlbumsResponse {
    const TYPE_NAME: &'static str = "ListSharedAlbumsResponse";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            shared_albums: object.or_default("sharedAlbums")?,
            next_page_token: object.optional("nextPageToken")?,
        })
    }
}

/// Also the shape of a media item search result.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMediaItemsResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media_items: Vec<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl ListMediaItemsResponse {
    /// Items whose bytes can be downloaded right now.
    pub fn ready_items(&self) -> impl Iterator<Item = &MediaItem> {
        self.media_items.iter().filter(|item| item.is_ready())
    }
}

impl Decode for ListMediaItemsResponse {
    const TYPE_NAME: &'static str = "ListMediaItemsResponse";

    fn decode(object: &Object<'_>) -> Result<Self> {
        Ok(Self {
            media_items: object.or_default("mediaItems")?,
            next_page_token: object.optional("nextPageToken")?,
        })
    }
}

impl_resource!(
    ListAlbumsResponse,
    ListSharedAlbumsResponse,
    ListMediaItemsResponse
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{decode::from_value, error::Error};

    #[test]
    fn test_empty_page() {
        let page: ListAlbumsResponse = from_value(&json!({})).unwrap();
        assert_eq!(page, ListAlbumsResponse::default());
    }

    #[test]
    fn test_shared_albums_page() {
        let page: ListSharedAlbumsResponse = from_value(&json!({
            "sharedAlbums": [
                { "id": "a", "title": "t", "productUrl": "u",
                  "shareInfo": { "sharedAlbumOptions": {}, "shareToken": "s" } }
            ],
            "nextPageToken": "next"
        }))
        .unwrap();

        assert_eq!(page.shared_albums.len(), 1);
        assert!(page.shared_albums[0].is_shared());
        assert_eq!(page.next_page_token.as_deref(), Some("next"));
    }

    #[test]
    fn test_one_bad_item_fails_the_page() {
        let err = from_value::<ListMediaItemsResponse>(&json!({
            "mediaItems": [{
                "id": "m",
                "productUrl": "u",
                "baseUrl": "b",
                "mimeType": "image/jpeg",
                "mediaMetadata": {
                    "creationTime": "2020-01-01T00:00:00Z",
                    "width": "1",
                    "height": "1"
                }
            }]
        }))
        .unwrap_err();
        assert!(matches!(err, Error::UnrecognizedMediaType));
    }

    #[test]
    fn test_ready_items() {
        let page: ListMediaItemsResponse = from_value(&json!({
            "mediaItems": [
                {
                    "id": "photo",
                    "productUrl": "u",
                    "baseUrl": "b",
                    "mimeType": "image/jpeg",
                    "mediaMetadata": {
                        "creationTime": "2020-01-01T00:00:00Z",
                        "width": "1",
                        "height": "1",
                        "photo": {}
                    }
                },
                {
                    "id": "video",
                    "productUrl": "u",
                    "baseUrl": "b",
                    "mimeType": "video/mp4",
                    "mediaMetadata": {
                        "creationTime": "2020-01-01T00:00:00Z",
                        "width": "1",
                        "height": "1",
                        "video": { "status": "PROCESSING" }
                    }
                }
            ]
        }))
        .unwrap();

        let ready: Vec<_> = page.ready_items().map(|item| item.id.as_str()).collect();
        assert_eq!(ready, ["photo"]);
    }
}
