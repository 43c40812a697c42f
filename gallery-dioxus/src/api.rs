//! Album fetching.
//!
//! The album endpoint is reached through the [`PhotoSource`] trait so the
//! root controller can be driven by an in-memory source in tests.

use thiserror::Error;

use crate::images::PlaceholderImages;
use crate::state::{Photo, RawPhoto};

/// Ways the album fetch can fail. All of them are handled identically.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or no response arrived.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// A response arrived with a non-success status.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },
    /// The body was not a JSON array of photo records.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can list the photos of the album.
#[allow(async_fn_in_trait)]
pub trait PhotoSource {
    async fn fetch_album(&self) -> Result<Vec<RawPhoto>, FetchError>;
}

/// Fetches the album over HTTP with a single GET.
#[derive(Debug, Clone)]
pub struct HttpPhotoSource {
    client: reqwest::Client,
    album_url: String,
}

impl HttpPhotoSource {
    #[must_use]
    pub fn new(album_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            album_url: album_url.into(),
        }
    }

    #[must_use]
    pub fn album_url(&self) -> &str {
        &self.album_url
    }
}

impl PhotoSource for HttpPhotoSource {
    async fn fetch_album(&self) -> Result<Vec<RawPhoto>, FetchError> {
        log::info!("Fetching album from {}", self.album_url);

        let response = self
            .client
            .get(&self.album_url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;
        decode_album(&body)
    }
}

/// Decode an album response body.
pub fn decode_album(body: &[u8]) -> Result<Vec<RawPhoto>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

/// Fetch the album and remap every record to placeholder image URLs.
pub async fn fetch_photos<S: PhotoSource>(
    source: &S,
    images: &PlaceholderImages,
) -> Result<Vec<Photo>, FetchError> {
    let raw = source.fetch_album().await?;
    log::debug!("Fetched {} photos", raw.len());
    Ok(raw
        .into_iter()
        .map(|photo| Photo::from_raw(photo, images))
        .collect())
}
