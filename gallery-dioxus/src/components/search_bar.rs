//! Search input component.
//!
//! Captures keystrokes and reports every change upward; the term itself is
//! owned by the root component.

use dioxus::prelude::*;

use super::{SEARCH_INPUT_ID, SEARCH_LABEL, SEARCH_PLACEHOLDER};

/// Labelled search box inside a `search` landmark.
#[component]
pub fn SearchBar(on_search: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-container",
            role: "search",

            label {
                r#for: SEARCH_INPUT_ID,
                class: "search-label sr-only",
                "{SEARCH_LABEL}"
            }

            div {
                class: "search-input-wrapper",
                span { class: "search-icon", "\u{1f50d}" }
                input {
                    id: SEARCH_INPUT_ID,
                    r#type: "text",
                    class: "search-input",
                    placeholder: SEARCH_PLACEHOLDER,
                    aria_label: SEARCH_LABEL,
                    autocomplete: "off",
                    oninput: move |evt: FormEvent| on_search.call(evt.value()),
                }
            }
        }
    }
}
