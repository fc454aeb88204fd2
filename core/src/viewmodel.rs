//! Observable view model owning the last-known catalog.
//!
//! # Design
//! The view model is single-threaded — it lives on the host's UI thread, so
//! observers are plain boxed closures with no synchronization. A fetch is
//! split the same way as the client: `trigger_fetch` hands the host a request
//! to execute, `complete_fetch` / `fail_fetch` feed the outcome back in.
//! Overlapping triggers are deliberately not deduplicated or cancelled; the
//! completion that arrives last wins the state, whatever order the triggers
//! were issued in.
//!
//! The shipped app discarded fetch failures entirely; here they land in
//! `GalleryState::Failed` so the outcome is observable, while the rendering
//! of a failure is still just the placeholder message (see `view`).

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::repository::GalleryRepository;
use crate::types::ImageList;

/// What the view model currently knows about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryState {
    /// No fetch has completed yet.
    Empty,
    /// The last completed fetch produced a valid catalog.
    Loaded(ImageList),
    /// The last completed fetch failed; the message describes why.
    Failed(String),
}

impl GalleryState {
    pub fn image_list(&self) -> Option<&ImageList> {
        match self {
            GalleryState::Loaded(list) => Some(list),
            _ => None,
        }
    }
}

/// Handle returned by `subscribe`, passed to `unsubscribe` on view teardown.
pub type SubscriptionId = u64;

/// Owns the latest `GalleryState` and notifies observers on every change.
pub struct GalleryViewModel {
    repository: GalleryRepository,
    state: GalleryState,
    observers: Vec<(SubscriptionId, Box<dyn FnMut(&GalleryState)>)>,
    next_subscription: SubscriptionId,
}

impl GalleryViewModel {
    /// The repository is injected explicitly; there is no global container.
    pub fn new(repository: GalleryRepository) -> Self {
        Self {
            repository,
            state: GalleryState::Empty,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Start one fetch. The host executes the returned request and reports
    /// back through `complete_fetch` or `fail_fetch`. Calling this again
    /// while a fetch is in flight is allowed; nothing is cancelled.
    pub fn trigger_fetch(&self) -> HttpRequest {
        self.repository.build_fetch_images()
    }

    /// Feed a completed round-trip back in. Exactly one state update per
    /// invocation, success or failure.
    pub fn complete_fetch(&mut self, response: HttpResponse) {
        match self.repository.parse_fetch_images(response) {
            Ok(list) => self.set_state(GalleryState::Loaded(list)),
            Err(err) => self.set_state(GalleryState::Failed(err.to_string())),
        }
    }

    /// Report that the host could not complete the round-trip at all.
    pub fn fail_fetch(&mut self, message: &str) {
        let err = ApiError::Transport(message.to_string());
        self.set_state(GalleryState::Failed(err.to_string()));
    }

    /// Register an observer called on every state change. The caller keeps
    /// the id and unsubscribes when its view goes away.
    pub fn subscribe(&mut self, observer: impl FnMut(&GalleryState) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    fn set_state(&mut self, state: GalleryState) {
        self.state = state;
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
    }
}
