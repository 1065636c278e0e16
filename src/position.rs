//! Where new media items or enrichments land inside an album. Only ever sent
//! to the service, never received.

use serde::{ser::SerializeMap, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlbumPosition {
    PositionTypeUnspecified,
    FirstInAlbum,
    LastInAlbum,
    AfterMediaItem { relative_media_item_id: String },
    AfterEnrichmentItem { relative_enrichment_item_id: String },
}

impl AlbumPosition {
    /// The value written to the `position` key.
    pub fn position_type(&self) -> &'static str {
        match self {
            AlbumPosition::PositionTypeUnspecified => "POSITION_TYPE_UNSPECIFIED",
            AlbumPosition::FirstInAlbum => "FIRST_IN_ALBUM",
            AlbumPosition::LastInAlbum => "LAST_IN_ALBUM",
            AlbumPosition::AfterMediaItem { .. } => "AFTER_MEDIA_ITEM",
            AlbumPosition::AfterEnrichmentItem { .. } => "AFTER_ENRICHMENT_ITEM",
        }
    }

    pub fn after_media_item(id: impl Into<String>) -> Self {
        AlbumPosition::AfterMediaItem {
            relative_media_item_id: id.into(),
        }
    }

    pub fn after_enrichment_item(id: impl Into<String>) -> Self {
        AlbumPosition::AfterEnrichmentItem {
            relative_enrichment_item_id: id.into(),
        }
    }
}

impl Serialize for AlbumPosition {
    /// Every variant writes `position`; the two relative variants also write
    /// the id they are relative to.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let relative = match self {
            AlbumPosition::AfterMediaItem {
                relative_media_item_id,
            } => Some(("relativeMediaItemId", relative_media_item_id)),
            AlbumPosition::AfterEnrichmentItem {
                relative_enrichment_item_id,
            } => Some(("relativeEnrichmentItemId", relative_enrichment_item_id)),
            _ => None,
        };

        let mut map = serializer.serialize_map(Some(1 + relative.is_some() as usize))?;
        map.serialize_entry("position", self.position_type())?;
        if let Some((key, id)) = relative {
            map.serialize_entry(key, id)?;
        }
        map.end()
    }
}
