//! Render model for the gallery screen.
//!
//! # Design
//! The same host-does-X split as the I/O layer, applied to drawing: the core
//! computes *what* to render as plain data and the host's UI toolkit draws
//! it. `Empty` and `Failed` both render the static placeholder message —
//! a failed fetch is indistinguishable on screen from one that has not
//! happened yet. Styling and the fade-in duration ride along on each row as
//! presentation metadata with no data-model effect.

use crate::http::HttpRequest;
use crate::types::ImageList;
use crate::viewmodel::{GalleryState, GalleryViewModel};

/// Shown before the first successful fetch and after a failed one.
pub const PLACEHOLDER_MESSAGE: &str = "Content is not available yet.";

pub const ROW_CORNER_RADIUS: f32 = 10.0;
pub const ROW_PADDING: f32 = 8.0;
/// Seconds over which a row's image fades from transparent to opaque once
/// any image (real or placeholder) becomes available.
pub const FADE_IN_SECONDS: f32 = 0.35;

/// One rendered row: the item's name as a heading, its image below.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub heading: String,
    pub image_url: String,
    pub corner_radius: f32,
    pub padding: f32,
    pub fade_in_seconds: f32,
}

/// What the host should draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewTree {
    /// A static message centered on screen.
    Message(&'static str),
    /// A scrollable list of rows, in catalog order.
    Rows(Vec<Row>),
}

/// Tracks per-screen lifecycle: the first appearance triggers one fetch.
#[derive(Debug, Default)]
pub struct GalleryView {
    appeared: bool,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the host every time the screen becomes visible. Returns the
    /// catalog request on the first call only; re-appearances within the
    /// same lifecycle do not re-trigger.
    pub fn on_appear(&mut self, view_model: &GalleryViewModel) -> Option<HttpRequest> {
        if self.appeared {
            return None;
        }
        self.appeared = true;
        Some(view_model.trigger_fetch())
    }

    pub fn render(state: &GalleryState) -> ViewTree {
        match state {
            GalleryState::Loaded(list) => ViewTree::Rows(rows(list)),
            GalleryState::Empty | GalleryState::Failed(_) => {
                ViewTree::Message(PLACEHOLDER_MESSAGE)
            }
        }
    }
}

fn rows(list: &ImageList) -> Vec<Row> {
    list.images
        .iter()
        .map(|item| Row {
            heading: item.name.clone(),
            image_url: item.image_url.clone(),
            corner_radius: ROW_CORNER_RADIUS,
            padding: ROW_PADDING,
            fade_in_seconds: FADE_IN_SECONDS,
        })
        .collect()
}
