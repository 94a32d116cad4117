//! API error types.

use thiserror::Error;

/// Market-data client error types.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("no data returned for symbol {0}")]
    NoData(String),
}
