//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or client construction).
    #[error("Request failed")]
    RequestFailed,
    /// The API key was rejected (HTTP 401).
    #[error("Invalid API key (HTTP 401)")]
    InvalidApiKey,
    /// The account exceeded its request or credit allowance (HTTP 429).
    #[error("Rate limited by CoinMarketCap API (HTTP 429)")]
    RateLimited,
    /// The API answered with a status envelope carrying a non-zero error code.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
    /// The API returned a non-success status without a readable envelope.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body could not be decoded into the expected type.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
}
