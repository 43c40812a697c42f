//! A single photo in the grid.

use dioxus::prelude::*;

use crate::config::MatchMode;
use crate::state::Photo;

use super::highlighted_title::HighlightedTitle;
use super::{IMAGE_LOADING, LINK_REL, LINK_TARGET};

/// Card with a lazily loaded thumbnail linking to the full-size image, and
/// the highlighted title beneath.
#[component]
pub fn PhotoCard(photo: Photo, search_term: String, match_mode: MatchMode) -> Element {
    let alt = photo.alt_text();
    let link_label = format!("View larger version of {}", photo.title);

    rsx! {
        article {
            class: "photo-card",
            role: "article",

            a {
                href: "{photo.url}",
                target: LINK_TARGET,
                rel: LINK_REL,
                class: "photo-link",
                aria_label: "{link_label}",

                div {
                    class: "photo-image-container",
                    img {
                        src: "{photo.thumbnail_url}",
                        alt: "{alt}",
                        class: "photo-image",
                        "loading": IMAGE_LOADING,
                    }
                    div {
                        class: "photo-overlay",
                        span { class: "photo-zoom-icon", "\u{1f50d}" }
                    }
                }
            }

            div {
                class: "photo-info",
                p {
                    class: "photo-title",
                    HighlightedTitle {
                        title: photo.title.clone(),
                        term: search_term,
                        match_mode,
                    }
                }
            }
        }
    }
}
