//! Repository mapping wire responses into validated domain values.
//!
//! # Design
//! Wraps `GalleryClient` and adds the decode-then-validate step: the client
//! yields an `ImageListResponse` with optional fields, the repository turns
//! it into an `ImageList` or a typed error. The shipped app asserted in debug
//! and silently dropped the list in release when validation failed; here the
//! failure travels the result channel as `ApiError::Validation` so callers
//! and tests can observe it. Nothing is ever raised outside the `Result`.

use crate::client::GalleryClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::ImageList;

/// Fetches the catalog and maps it into the domain.
#[derive(Debug, Clone)]
pub struct GalleryRepository {
    client: GalleryClient,
}

impl GalleryRepository {
    pub fn new(client: GalleryClient) -> Self {
        Self { client }
    }

    pub fn build_fetch_images(&self) -> HttpRequest {
        self.client.build_fetch_images()
    }

    /// Decode the catalog response and validate it into an `ImageList`.
    ///
    /// One item missing a name or URL fails the whole list, matching the
    /// all-or-nothing mapping of the shipped app.
    pub fn parse_fetch_images(&self, response: HttpResponse) -> Result<ImageList, ApiError> {
        let raw = self.client.parse_fetch_images(response)?;
        raw.into_list()
            .ok_or_else(|| ApiError::Validation("catalog entry missing name or imageurl".to_string()))
    }

    pub fn client(&self) -> &GalleryClient {
        &self.client
    }
}
