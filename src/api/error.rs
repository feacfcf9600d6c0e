//! Error type for the players API client.
//!
//! Three variants: transport failures (connect/read errors), non-2xx
//! responses with their status and body, and responses that failed the
//! typed decode/validation step. The UI does not distinguish between them -
//! all three collapse into the failed-state banner via `Display` - but
//! callers that care (tests, logging) can match on the variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, read).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}
