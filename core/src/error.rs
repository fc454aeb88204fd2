//! Error types for the gallery pipeline.
//!
//! # Design
//! Four variants, one per failure class: the host could not complete the
//! round-trip (`Transport`), the server answered outside 2xx (`Http`), the
//! body did not decode (`Deserialization`), or the decoded catalog failed
//! domain validation (`Validation`). The view model collapses all of them
//! into its `Failed` state; the variants exist so tests and the FFI surface
//! can tell the classes apart.

use std::fmt;

/// Errors produced by the client and repository parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The host reported that the HTTP round-trip itself failed.
    Transport(String),

    /// The server returned a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be decoded (malformed JSON or image data).
    Deserialization(String),

    /// The decoded catalog violated a domain invariant (missing name or URL).
    Validation(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Deserialization(msg) => write!(f, "decoding failed: {msg}"),
            ApiError::Validation(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
