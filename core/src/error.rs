//! Error types for the job post API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server rejected the request." All
//! other non-2xx responses land in `HttpError`. Both carry the message the
//! user should see: the body's `error` field when the server sent one, a
//! generic status line otherwise. `Display` prints that message alone so the
//! controller can surface it verbatim.

use thiserror::Error;

/// Errors returned by `JobPostClient` parse methods and `JobPostApi` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("{message}")]
    NotFound { message: String },

    /// The server returned a non-2xx status other than 404.
    #[error("{message}")]
    HttpError { status: u16, message: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A network-level failure reported by a `Transport`.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = ApiError::HttpError {
            status: 400,
            message: "Missing required field: title".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required field: title");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn transport_error_converts() {
        let err: ApiError = TransportError::new("connection refused").into();
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }
}
