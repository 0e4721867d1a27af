//! Error types for the Wordnik client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the word is unknown" from "the server refused the request." Every other
//! non-2xx response lands in `Rejected` with the raw status code and body;
//! the body is kept as text and never decoded as a payload.

use thiserror::Error;

/// Errors returned by `WordnikClient` dispatch and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("request rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// A 2xx response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Client configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failures below the HTTP layer: DNS, refused or reset connections, timeouts.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Ureq(#[from] ureq::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
