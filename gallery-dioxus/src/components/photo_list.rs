//! Photo list component.
//!
//! Renders exactly one of the loading indicator, the no-results message or
//! the photo grid, as selected by [`select_view`].

use dioxus::prelude::*;

use crate::config::MatchMode;
use crate::filter::select_view;
use crate::state::{GalleryView, Photo};

use super::photo_card::PhotoCard;
use super::{no_results_message, LOADING_TEXT, NO_RESULTS_SUGGESTION};

#[component]
pub fn PhotoList(
    photos: Vec<Photo>,
    search_term: String,
    is_loading: bool,
    #[props(default)] match_mode: MatchMode,
) -> Element {
    match select_view(&photos, &search_term, is_loading) {
        GalleryView::Loading => rsx! {
            div {
                class: "loading-container",
                div {
                    class: "loading-spinner",
                    role: "status",
                    aria_label: "Loading photos",
                }
                p { class: "loading-text", "{LOADING_TEXT}" }
            }
        },
        GalleryView::Empty { term } => {
            let message = no_results_message(&term);
            rsx! {
                div {
                    class: "no-results",
                    p { class: "no-results-text", "{message}" }
                    p { class: "no-results-suggestion", "{NO_RESULTS_SUGGESTION}" }
                }
            }
        }
        GalleryView::Results(items) => rsx! {
            section {
                class: "photo-gallery",
                role: "main",
                aria_label: "Photo gallery",

                div {
                    class: "photos-grid",
                    for photo in items {
                        PhotoCard {
                            key: "{photo.id}",
                            photo: photo.clone(),
                            search_term: search_term.clone(),
                            match_mode,
                        }
                    }
                }
            }
        },
    }
}
