//! Entry point for the gallery binary.

mod args;
mod tracing_setup;

use anyhow::Result;
use gallery_dioxus::GalleryConfig;

fn main() -> Result<()> {
    let cli = args::parse_args();

    // An explicit config file must load; the default location falls back to defaults
    let mut config = match &cli.config {
        Some(path) => GalleryConfig::load_from(path)?,
        None => GalleryConfig::load_default().unwrap_or_else(|err| {
            eprintln!("Warning: failed to load gallery.toml: {err}");
            eprintln!("Using default configuration");
            GalleryConfig::default()
        }),
    };
    if let Some(url) = cli.album_url.clone() {
        config = config.with_album_url(url);
    }
    if let Some(mode) = cli.match_mode {
        config = config.with_match_mode(mode);
    }

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    if let tracing_setup::LogTarget::File(path) = tracing_setup::init(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    log::info!("Starting gallery");
    for warning in &cli.warnings {
        log::warn!("{warning}");
    }

    // Tokio runtime for the album fetch
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    gallery_dioxus::launch(&config)
}
