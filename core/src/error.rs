//! Error types shared by the server and the client.
//!
//! # Design
//! `ValidationError` renders as the exact plain-text body the server sends
//! with a 400, so both sides agree on the messages. `ApiError` is what the
//! client reports after looking at a response status.

use thiserror::Error;

/// A request rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid Todo Category")]
    Category,

    #[error("Invalid Todo Priority")]
    Priority,

    #[error("Invalid Todo Status")]
    Status,

    #[error("Invalid Due Date")]
    DueDate,

    /// An insert body lacked one of its six required fields.
    #[error("Missing Todo Field: {0}")]
    MissingField(&'static str),

    /// An update body carried none of the updatable fields.
    #[error("No Todo Field To Update")]
    NothingToUpdate,
}

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the request with a 400 and a plain-text reason.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
