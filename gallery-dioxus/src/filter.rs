//! Search filtering and render-state selection.

use crate::state::{GalleryView, Photo};

/// Whether a photo survives the search filter.
///
/// Plain case-insensitive substring containment over the title; deliberately
/// looser than the word-scoped rule used for highlighting.
#[must_use]
pub fn matches_term(photo: &Photo, term: &str) -> bool {
    term.is_empty() || photo.title.to_lowercase().contains(&term.to_lowercase())
}

/// Photos whose title contains `term`, in their original order.
#[must_use]
pub fn filter_photos(photos: &[Photo], term: &str) -> Vec<Photo> {
    if term.is_empty() {
        return photos.to_vec();
    }
    photos
        .iter()
        .filter(|photo| matches_term(photo, term))
        .cloned()
        .collect()
}

/// Select exactly one render state for the photo list.
#[must_use]
pub fn select_view(photos: &[Photo], term: &str, is_loading: bool) -> GalleryView {
    if is_loading {
        return GalleryView::Loading;
    }

    let filtered = filter_photos(photos, term);
    if filtered.is_empty() && !term.is_empty() {
        GalleryView::Empty {
            term: term.to_string(),
        }
    } else {
        GalleryView::Results(filtered)
    }
}
