//! Main application component.
//!
//! This is the root Dioxus component: it owns the gallery state, fetches the
//! album once on mount and composes the header, search bar and photo list.

use dioxus::prelude::*;

use crate::api::{fetch_photos, HttpPhotoSource};
use crate::components::{AppHeader, PhotoList, SearchBar};
use crate::hooks::{use_gallery, use_gallery_signal};
use crate::state::GalleryState;
use crate::AppState;

/// Main application component.
#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();

    // Gallery state is provided as context so child hooks can reach it
    use_context_provider(|| Signal::new(GalleryState::new()));
    let mut gallery = use_gallery_signal();

    // Fetch the album exactly once. Failures are logged by `settle` and leave
    // the list empty; the header and search bar keep working.
    let fetch_state = app_state.clone();
    use_future(move || {
        let app_state = fetch_state.clone();
        async move {
            if !gallery.write().begin_fetch() {
                return;
            }
            let source = HttpPhotoSource::new(app_state.album_url.clone());
            let outcome = fetch_photos(&source, &app_state.images).await;
            gallery.write().settle(outcome);
        }
    });

    let snapshot = use_gallery();

    rsx! {
        div {
            class: "app",

            AppHeader {}

            main {
                class: "app-main",

                div {
                    class: "search-section",
                    SearchBar {
                        on_search: move |term: String| {
                            log::debug!("Search term changed: {term:?}");
                            gallery.write().set_search_term(term);
                        },
                    }
                }

                PhotoList {
                    photos: snapshot.photos().to_vec(),
                    search_term: snapshot.search_term().to_string(),
                    is_loading: snapshot.is_loading(),
                    match_mode: app_state.match_mode,
                }
            }
        }
    }
}
