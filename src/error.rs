use thiserror::Error;

/// Errors that can occur while fetching or configuring a scrape.
///
/// Missing markup is never an error; it shows up as empty fields.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to reach the remote site or read its body
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The remote site answered with a non-success status
    #[error("Unexpected status {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// A layout row produced an invalid attribute pattern
    #[error("Invalid markup layout: {0}")]
    Pattern(#[from] regex::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
