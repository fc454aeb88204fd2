//! Per-row image loader with placeholder substitution.
//!
//! # Design
//! One loader instance per rendered row, owning that row's decoded pixels.
//! `start` builds the request (or declines when the row has no URL) and the
//! host executes it; `complete` / `fail` publish the outcome. Any failure —
//! transport, non-2xx, undecodable bytes — publishes the placeholder instead
//! of an error: a row always ends up showing *something*. A second `start`
//! on the same instance is not guarded against; an in-flight request whose
//! row was torn down is simply abandoned by the host.

use image::{Rgba, RgbaImage};

use crate::client::GalleryClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

const PLACEHOLDER_SIZE: u32 = 32;
const PLACEHOLDER_GRAY: Rgba<u8> = Rgba([0xd0, 0xd0, 0xd0, 0xff]);

/// The solid-gray stand-in shown when a row's image cannot be loaded.
pub fn placeholder_image() -> RgbaImage {
    RgbaImage::from_pixel(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, PLACEHOLDER_GRAY)
}

/// Decode an image response body into RGBA pixels.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, ApiError> {
    image::load_from_memory(bytes)
        .map(|decoded| decoded.to_rgba8())
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Loads a single image resource for one row.
pub struct ImageLoader {
    client: GalleryClient,
    placeholder: RgbaImage,
    current: Option<RgbaImage>,
}

impl ImageLoader {
    pub fn new(client: GalleryClient, placeholder: RgbaImage) -> Self {
        Self {
            client,
            placeholder,
            current: None,
        }
    }

    /// Build the fetch for this row's image. A row without a URL issues no
    /// request at all and the loader stays empty; the presentation layer
    /// shows the placeholder directly.
    pub fn start(&self, uri: Option<&str>) -> Option<HttpRequest> {
        uri.map(|url| self.client.build_fetch_image(url))
    }

    /// Publish the outcome of the round-trip: the decoded image on success,
    /// the placeholder on any failure.
    pub fn complete(&mut self, response: HttpResponse) {
        let decoded = self
            .client
            .parse_fetch_image(response)
            .and_then(|bytes| decode_image(&bytes));
        self.current = Some(match decoded {
            Ok(img) => img,
            Err(_) => self.placeholder.clone(),
        });
    }

    /// The host could not complete the round-trip; publish the placeholder.
    pub fn fail(&mut self) {
        self.current = Some(self.placeholder.clone());
    }

    /// The decoded pixels for this row, absent until a load finishes.
    pub fn current_image(&self) -> Option<&RgbaImage> {
        self.current.as_ref()
    }
}
