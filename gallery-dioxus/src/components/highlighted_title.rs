//! Title text with search matches emphasized.

use dioxus::prelude::*;

use crate::config::MatchMode;
use crate::highlight::{highlight_with, Segment};

/// Photo title with every word matching `term` wrapped in `<i>`.
#[component]
pub fn HighlightedTitle(title: String, term: String, match_mode: MatchMode) -> Element {
    if term.is_empty() {
        return rsx! { "{title}" };
    }

    let segments: Vec<Element> = highlight_with(&title, &term, match_mode)
        .into_iter()
        .enumerate()
        .map(|(idx, segment)| match segment {
            Segment::Emphasized(text) => rsx! {
                i { key: "{idx}", class: "highlight-match", "{text}" }
            },
            Segment::Plain(text) => rsx! {
                span { key: "{idx}", "{text}" }
            },
        })
        .collect();

    rsx! {
        {segments.into_iter()}
    }
}
