//! UI Components for the photo gallery.
//!
//! Text and attribute constants shared by the components live here so the
//! rendered surface can be checked without a renderer.

mod header;
mod highlighted_title;
mod photo_card;
mod photo_list;
mod search_bar;

pub use header::AppHeader;
pub use highlighted_title::HighlightedTitle;
pub use photo_card::PhotoCard;
pub use photo_list::PhotoList;
pub use search_bar::SearchBar;

pub const APP_TITLE: &str = "\u{1f4f8} Photo Gallery";
pub const APP_SUBTITLE: &str = "Discover beautiful photos from around the world";

pub const SEARCH_INPUT_ID: &str = "photo-search";
pub const SEARCH_LABEL: &str = "Search photos by title";
pub const SEARCH_PLACEHOLDER: &str = "Search photos by title...";

pub const LOADING_TEXT: &str = "Loading beautiful photos...";
pub const NO_RESULTS_SUGGESTION: &str = "Try searching for something else!";

/// Full-size images open in a new browsing context without opener or referrer.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

pub const IMAGE_LOADING: &str = "lazy";

/// Message shown when a search term matches no photo.
#[must_use]
pub fn no_results_message(term: &str) -> String {
    format!("No photos found matching \"{term}\"")
}
