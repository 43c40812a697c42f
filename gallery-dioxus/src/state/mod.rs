//! Gallery state management.
//!
//! `GalleryState` is the root controller's model: it owns the photo list,
//! the fetch lifecycle and the search term. The UI holds it in a signal and
//! derives everything it renders from it.

mod types;

pub use types::{GalleryView, LoadState, Photo, RawPhoto};

use crate::api::FetchError;
use crate::filter::select_view;

/// Owned state of the gallery.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    photos: Vec<Photo>,
    search_term: String,
    load_state: LoadState,
    fetch_started: bool,
    last_error: Option<String>,
}

impl GalleryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the one album fetch of this session.
    ///
    /// Returns `true` the first time only; callers issue the request when it does.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_started {
            log::debug!("Album fetch already started, ignoring");
            return false;
        }
        self.fetch_started = true;
        true
    }

    /// Record the outcome of the album fetch.
    ///
    /// Success replaces the photo list wholesale. Failure keeps the current
    /// list and is logged. Either way the load state becomes `Settled`;
    /// outcomes arriving after that are ignored.
    pub fn settle(&mut self, outcome: Result<Vec<Photo>, FetchError>) {
        if self.load_state == LoadState::Settled {
            log::warn!("Album fetch settled twice, ignoring second outcome");
            return;
        }

        match outcome {
            Ok(photos) => {
                log::info!("Loaded {} photos", photos.len());
                self.photos = photos;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("Failed to fetch photos: {err}");
                self.last_error = Some(err.to_string());
            }
        }
        self.load_state = LoadState::Settled;
    }

    /// Replace the search term. No validation and no debounce.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Pending
    }

    /// Message of the last fetch failure, kept for diagnostics only.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// What the photo list should render right now.
    #[must_use]
    pub fn view(&self) -> GalleryView {
        select_view(&self.photos, &self.search_term, self.is_loading())
    }
}
