//! Portable core of the image gallery app.
//!
//! # Overview
//! Implements the whole fetch-decode-map-display pipeline — API client,
//! repository, view model, image loader, and render model — without ever
//! touching the network (host-does-IO pattern). Components that perform I/O
//! in the app are split into a `build_*` / `trigger_*` half that produces an
//! `HttpRequest` as plain data and a `parse_*` / `complete_*` half that
//! consumes an `HttpResponse`. The host executes the actual round-trip in
//! between, which keeps the core deterministic and easy to test.
//!
//! # Design
//! - `GalleryClient` is stateless — it holds only `base_url`.
//! - The repository turns optional wire fields into validated domain values;
//!   an `ImageItem` never exists with a missing name or URL.
//! - `GalleryViewModel` owns the last-known list as observable state with an
//!   explicit subscribe/unsubscribe registry.
//! - The view is a render model: `render` computes *what* to draw (rows or a
//!   placeholder message) as plain data, the host draws it.
//! - Types use owned `String` / `Vec` fields to simplify the FFI mapping.

pub mod client;
pub mod error;
pub mod http;
pub mod loader;
pub mod repository;
pub mod types;
pub mod view;
pub mod viewmodel;

pub use client::{GalleryClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use loader::{placeholder_image, ImageLoader};
pub use repository::GalleryRepository;
pub use types::{ImageItem, ImageItemResponse, ImageList, ImageListResponse};
pub use view::{GalleryView, Row, ViewTree, PLACEHOLDER_MESSAGE};
pub use viewmodel::{GalleryState, GalleryViewModel, SubscriptionId};
