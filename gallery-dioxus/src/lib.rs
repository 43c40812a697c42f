//! Photo gallery - a Dioxus desktop app for browsing a photo album
//!
//! The gallery fetches a fixed album once on startup, replaces every image
//! link with a deterministic placeholder URL, and lets the user filter the
//! grid by title with matching words highlighted.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gallery_dioxus::GalleryConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = GalleryConfig::load_default()?;
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let _guard = runtime.enter();
//!     gallery_dioxus::launch(&config)
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. `App` owns a `Signal<GalleryState>` holding the photos, fetch lifecycle and search term
//! 2. The album is fetched once on mount through a [`api::PhotoSource`]
//! 3. `PhotoList` derives a [`state::GalleryView`] from the state on every render
//! 4. Titles are split into [`highlight::Segment`]s for emphasis

use anyhow::Result;

// Public library modules
pub mod api;
pub mod components;
pub mod config;
pub mod filter;
pub mod highlight;
pub mod hooks;
pub mod images;
pub mod state;

// Internal modules
mod app;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use config::{GalleryConfig, MatchMode};
pub use state::{GalleryState, GalleryView, Photo};

use crate::images::PlaceholderImages;

/// Gallery stylesheet.
const STYLESHEET: &str = include_str!("../assets/style.css");

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains plain settings.
#[derive(Clone, Debug)]
pub struct AppState {
    pub album_url: String,
    pub images: PlaceholderImages,
    pub match_mode: MatchMode,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            album_url: config.api.album_url.clone(),
            images: PlaceholderImages::from(&config.images),
            match_mode: config.search.match_mode,
        }
    }
}

/// Launch the Dioxus desktop application.
///
/// Before calling this, ensure a Tokio runtime is active (via `Runtime::enter()`)
/// and logging has been initialized.
pub fn launch(config: &GalleryConfig) -> Result<()> {
    let app_state = AppState::from_config(config);
    log::info!(
        "Launching gallery (album: {}, match mode: {:?})",
        app_state.album_url,
        app_state.match_mode
    );

    let custom_head = format!("<style>{STYLESHEET}</style>");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}
