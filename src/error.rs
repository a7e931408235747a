//! Errors raised while fetching a project page

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network failure, timeout or non-success status. The message is the
    /// transport's own.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}
