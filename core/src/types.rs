//! Wire and domain models for the image catalog.
//!
//! # Design
//! The `*Response` types mirror the server's JSON exactly, with every field
//! optional so a partial payload still decodes; the wire key for an item's
//! URL is the lowercase `imageurl`. The domain types carry no options: an
//! `ImageItem` is only constructed from a response item that has both fields,
//! and an `ImageList` only when every source item maps. One invalid item
//! fails the whole list (all-or-nothing, matching the shipped app).

use serde::Deserialize;

/// Wire shape of one catalog entry. Transient; discarded after mapping.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ImageItemResponse {
    pub name: Option<String>,
    #[serde(rename = "imageurl")]
    pub image_url: Option<String>,
}

/// Wire shape of the catalog document.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ImageListResponse {
    pub images: Option<Vec<ImageItemResponse>>,
}

/// A validated catalog entry. Never exists with a missing name or URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub name: String,
    pub image_url: String,
}

/// The validated catalog, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    pub images: Vec<ImageItem>,
}

impl ImageItemResponse {
    fn into_item(self) -> Option<ImageItem> {
        Some(ImageItem {
            name: self.name?,
            image_url: self.image_url?,
        })
    }
}

impl ImageListResponse {
    /// Map the wire catalog into the domain. Returns `None` when the list is
    /// missing or any single item lacks a required field.
    pub fn into_list(self) -> Option<ImageList> {
        let images = self
            .images?
            .into_iter()
            .map(ImageItemResponse::into_item)
            .collect::<Option<Vec<_>>>()?;
        Some(ImageList { images })
    }
}
