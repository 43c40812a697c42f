//! Placeholder image URLs.
//!
//! Every photo is shown with an image keyed on its id alone, so the same id
//! always resolves to the same picture at any size.

use crate::config::ImageConfig;

/// Builds `https://<host>/id/<id>/<width>/<height>` URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderImages {
    host: String,
    thumbnail_size: u32,
    full_size: u32,
}

impl Default for PlaceholderImages {
    fn default() -> Self {
        Self::from(&ImageConfig::default())
    }
}

impl From<&ImageConfig> for PlaceholderImages {
    fn from(config: &ImageConfig) -> Self {
        Self {
            host: config.host.trim_end_matches('/').to_string(),
            thumbnail_size: config.thumbnail_size,
            full_size: config.full_size,
        }
    }
}

impl PlaceholderImages {
    /// URL for a square image of the given edge length.
    #[must_use]
    pub fn url(&self, id: u64, size: u32) -> String {
        format!("https://{}/id/{id}/{size}/{size}", self.host)
    }

    #[must_use]
    pub fn thumbnail_url(&self, id: u64) -> String {
        self.url(id, self.thumbnail_size)
    }

    #[must_use]
    pub fn full_url(&self, id: u64) -> String {
        self.url(id, self.full_size)
    }
}
