//! Stateless HTTP request builder and response parser for the gallery API.
//!
//! # Design
//! `GalleryClient` holds only a `base_url` and carries no mutable state
//! between calls. Each fetch is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::ImageListResponse;

/// Catalog endpoint baked into the shipped app. Not configurable at runtime;
/// tests construct a client against the mock server instead.
pub const DEFAULT_BASE_URL: &str = "https://images.example.com/api";

/// Synchronous, stateless client for the gallery API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    base_url: String,
}

impl GalleryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch_images(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/images", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_fetch_images(&self, response: HttpResponse) -> Result<ImageListResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Image URLs come from the catalog and are already absolute, so the
    /// request is built verbatim rather than against `base_url`.
    pub fn build_fetch_image(&self, url: &str) -> HttpRequest {
        HttpRequest {
            url: url.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn parse_fetch_image(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }
}

impl Default for GalleryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Map non-2xx status codes to `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}
