//! Error types for the HTTP transport

use thiserror::Error;

/// Errors that can occur while talking to a device over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The device answered with a non-success status code
    #[error("HTTP status {code}")]
    Status { code: u16 },

    /// Connection, DNS, timeout or other I/O failure before a response arrived
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The response arrived but its body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl From<ureq::Error> for TransportError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, _) => TransportError::Status { code },
            ureq::Error::Transport(transport) => TransportError::Network(transport.to_string()),
        }
    }
}
