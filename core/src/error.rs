//! Error types for the todo repository.
//!
//! # Design
//! Every failure to complete a round trip against the remote collection is a
//! `NetworkError`. The variants only exist so log lines carry useful detail;
//! the synchronizer treats them all the same way (report, then refresh).

use thiserror::Error;

/// Any failure to complete an HTTP round trip against the todo resource.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl NetworkError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
