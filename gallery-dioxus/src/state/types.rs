//! Data types for gallery state management.
//!
//! This module contains the shared data structures passed between the
//! fetch layer, the root controller and the UI components.

use serde::Deserialize;

use crate::images::PlaceholderImages;

/// A photo record as returned by the album endpoint.
///
/// Only `id` and `title` are required; the upstream image links are ignored
/// in favour of placeholder URLs derived from the id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPhoto {
    pub id: u64,
    pub title: String,
}

/// A photo ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: u64,
    pub title: String,
    pub thumbnail_url: String,
    pub url: String,
}

impl Photo {
    /// Build a display photo, remapping both image links to placeholder URLs.
    #[must_use]
    pub fn from_raw(raw: RawPhoto, images: &PlaceholderImages) -> Self {
        Self {
            thumbnail_url: images.thumbnail_url(raw.id),
            url: images.full_url(raw.id),
            id: raw.id,
            title: raw.title,
        }
    }

    /// Alternative text for the thumbnail. Never empty.
    #[must_use]
    pub fn alt_text(&self) -> String {
        if self.title.trim().is_empty() {
            format!("Photo {}", self.id)
        } else {
            self.title.clone()
        }
    }
}

/// Lifecycle of the one-shot album fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Fetch not yet settled.
    #[default]
    Pending,
    /// Fetch finished, successfully or not. Terminal.
    Settled,
}

/// What the photo list should render, selected from the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    /// The album is still loading.
    Loading,
    /// A non-empty search term matched nothing.
    Empty { term: String },
    /// Photos to show, in fetch order.
    Results(Vec<Photo>),
}
