use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "Terjadi kesalahan saat mengambil data";

/// Shown when the catalog answered without a usable body.
pub const EMPTY_BODY_MESSAGE: &str = "Gagal mengambil data film";

#[derive(Debug, Error)]
pub enum FetchError {
    /// Never carries the request URL; the API key travels in its query string.
    #[error("{0}")]
    Network(reqwest::Error),
    #[error("Request failed with status code {0}")]
    HttpStatus(u16),
    #[error("{}", EMPTY_BODY_MESSAGE)]
    EmptyBody,
    #[error("Invalid response from catalog: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to decode poster: {0}")]
    Image(#[from] image::ImageError),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.without_url())
    }
}

impl FetchError {
    /// Text for the error banner. Every failure kind collapses to one string.
    pub fn banner_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TMDB API key is missing: pass --api-key or set TMDB_API_KEY")]
    MissingApiKey,
}
