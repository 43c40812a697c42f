//! Page header.

use dioxus::prelude::*;

use super::{APP_SUBTITLE, APP_TITLE};

#[component]
pub fn AppHeader() -> Element {
    rsx! {
        header {
            class: "app-header",
            h1 { class: "app-title", "{APP_TITLE}" }
            p { class: "app-subtitle", "{APP_SUBTITLE}" }
        }
    }
}
