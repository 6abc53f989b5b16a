//! Error type shared by the whole listing pipeline.
//!
//! # Design
//! `NotFound` keeps its own variant so hosts can tell a missing listing from
//! a failing server. Everything else keeps enough context (status, body,
//! decoder message) for the user-facing message. The presentation layer does
//! not branch on the variant; it only shows `to_string()`.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-200 status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be decoded into the wire record.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The round-trip itself failed (connection refused, timeout, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The blocking task running the round-trip was cancelled or panicked.
    #[error("request task failed: {0}")]
    Task(String),
}
