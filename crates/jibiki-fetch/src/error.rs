use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("base URL cannot take path segments: {0}")]
    InvalidBaseUrl(String),

    #[error("no dictionary entries found for {word}")]
    NoEntries { word: String },

    #[error("lookup task failed: {0}")]
    TaskFailed(String),
}
