//! Mock gallery server for integration tests and host development.
//!
//! Serves the catalog document at `/images` using the production wire shape
//! (`imageurl` in lowercase, fields omitted when absent, `images: null` when
//! the whole list is missing) and small generated PNGs at `/assets/{name}`.
//! `/assets/broken` returns non-image bytes for decode-failure tests. The
//! catalog is fixed at router construction; tests pick theirs via `app_with`.

use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// One catalog entry as it appears on the wire. Absent fields are omitted
/// from the JSON so malformed payloads can be simulated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imageurl: Option<String>,
}

impl CatalogImage {
    pub fn new(name: &str, imageurl: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            imageurl: Some(imageurl.to_string()),
        }
    }
}

/// The document served at `/images`. `images` serializes as `null` when the
/// catalog is absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub images: Option<Vec<CatalogImage>>,
}

type Catalog = Arc<CatalogDocument>;

/// The catalog the standalone binary serves.
pub fn sample_catalog() -> Vec<CatalogImage> {
    ["cat", "dog", "fox"]
        .into_iter()
        .map(|name| CatalogImage::new(name, &format!("http://127.0.0.1:3000/assets/{name}.png")))
        .collect()
}

pub fn app() -> Router {
    app_with(Some(sample_catalog()))
}

pub fn app_with(images: Option<Vec<CatalogImage>>) -> Router {
    let catalog: Catalog = Arc::new(CatalogDocument { images });
    Router::new()
        .route("/images", get(list_images))
        .route("/assets/{name}", get(get_asset))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(
    listener: TcpListener,
    images: Option<Vec<CatalogImage>>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(images)).await
}

async fn list_images(State(catalog): State<Catalog>) -> Json<CatalogDocument> {
    Json(catalog.as_ref().clone())
}

async fn get_asset(Path(name): Path<String>) -> Response {
    if name == "broken" {
        return ([(header::CONTENT_TYPE, "text/plain")], "not an image").into_response();
    }
    match encode_png(&name) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// An 8x8 solid PNG whose color is derived from the asset name, so different
/// assets produce distinguishable pixels.
fn encode_png(name: &str) -> Result<Vec<u8>, image::ImageError> {
    let img = image::DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, pixel_for(name)));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)?;
    Ok(buf.into_inner())
}

fn pixel_for(name: &str) -> Rgba<u8> {
    let sum = name.bytes().fold(0u8, u8::wrapping_add);
    Rgba([sum, sum.wrapping_mul(3), sum.wrapping_mul(7), 0xff])
}
