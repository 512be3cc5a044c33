use thiserror::Error;

/// Errors that can occur while talking to the meal catalog
#[derive(Error, Debug)]
pub enum MealError {
    /// Network failure or unreadable response
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configured base address is not a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Endpoint answered with a non-success status and no fallback applies
    #[error("Request to {url} failed with status {status}")]
    StatusError {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Search was requested with blank input
    #[error("Type a meal name to search")]
    EmptyQuery,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
