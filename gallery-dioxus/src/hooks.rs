//! Custom Dioxus hooks for gallery components.

use dioxus::prelude::*;

use crate::state::GalleryState;

/// Read the current gallery state from the signal context.
///
/// Components that call this automatically re-render when the state changes.
#[must_use]
pub fn use_gallery() -> GalleryState {
    use_context::<Signal<GalleryState>>().read().clone()
}

/// Get the gallery state signal for writing (e.g., on input or fetch completion).
#[must_use]
pub fn use_gallery_signal() -> Signal<GalleryState> {
    use_context::<Signal<GalleryState>>()
}
