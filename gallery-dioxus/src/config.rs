//! Configuration for the photo gallery.
//!
//! Configuration is loaded from `<config dir>/photo-gallery/gallery.toml` and
//! provides window, logging, album endpoint, image and search settings.

use std::path::{Path, PathBuf};

use anyhow::Result;
use etcetera::BaseStrategy;
use serde::Deserialize;

/// Default album endpoint.
pub const DEFAULT_ALBUM_URL: &str = "https://jsonplaceholder.typicode.com/albums/1/photos";

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
    pub images: ImageConfig,
    pub search: SearchConfig,
}

/// How a search term is matched against the words of a title when highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// The term is literal text.
    #[default]
    Literal,
    /// The term is a regular expression.
    Pattern,
}

impl std::str::FromStr for MatchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "literal" => Ok(Self::Literal),
            "pattern" => Ok(Self::Pattern),
            other => anyhow::bail!("unknown match mode: {other}"),
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub match_mode: MatchMode,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

/// Album endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub album_url: String,
}

/// Placeholder image configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub host: String,
    pub thumbnail_size: u32,
    pub full_size: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Photo Gallery".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("photo-gallery.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "mouseenter".to_string(),
                "mouseleave".to_string(),
                "pointermove".to_string(),
                "pointerenter".to_string(),
                "pointerleave".to_string(),
            ],
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            album_url: DEFAULT_ALBUM_URL.to_string(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            host: "picsum.photos".to_string(),
            thumbnail_size: 600,
            full_size: 1200,
        }
    }
}

impl GalleryConfig {
    /// Path of the default configuration file, if a config directory can be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        etcetera::choose_base_strategy()
            .ok()
            .map(|strategy| strategy.config_dir().join("photo-gallery").join("gallery.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<GalleryConfig>(&content)?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the album endpoint.
    #[must_use]
    pub fn with_album_url(mut self, url: impl Into<String>) -> Self {
        self.api.album_url = url.into();
        self
    }

    /// Set how search terms are matched when highlighting titles.
    #[must_use]
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.search.match_mode = mode;
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}
