//! Response shapes for a transport layer.
//!
//! Nothing here depends on a web framework: a transport serializes
//! [`Envelope`] or [`ErrorResponse::body`] as JSON and uses
//! [`ErrorResponse::status`] as its status code.

use serde::Serialize;
use tracing::error;

use crate::error::{Classified, ErrorKind};

/// Message returned in place of internal error details.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Success envelope: `{"data": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    /// Payload.
    pub data: T,
    /// Human-readable outcome.
    pub message: String,
}

impl<T> Envelope<T> {
    /// Wraps `data` with `message`.
    #[must_use]
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Error body: `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Client-facing description.
    pub message: String,
}

/// Status code and body for a failed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    status: u16,
    body: ErrorBody,
}

impl ErrorResponse {
    /// Maps an error onto a response.
    ///
    /// Not-found and invariant errors keep their message. Internal errors are
    /// logged with their cause and answered with [`INTERNAL_ERROR_MESSAGE`].
    pub fn from_error<E>(err: &E) -> Self
    where
        E: Classified + std::error::Error,
    {
        let kind = err.kind();
        let message = if kind == ErrorKind::Internal {
            error!(error = %err, "operation failed");
            INTERNAL_ERROR_MESSAGE.to_owned()
        } else {
            err.to_string()
        };
        Self {
            status: status_code(kind),
            body: ErrorBody { message },
        }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the body.
    #[must_use]
    pub const fn body(&self) -> &ErrorBody {
        &self.body
    }
}

/// Returns the HTTP status code for an error kind.
#[must_use]
pub const fn status_code(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::NotFound => 404,
        ErrorKind::InvariantViolation => 400,
        ErrorKind::Internal => 500,
    }
}
