//! Error types exposed by the form controllers and their collaborators.

use thiserror::Error;

/// Errors surfaced while configuring the controllers or talking to the server.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewKitError {
    /// Networking failed before a response was received.
    #[error("network error submitting form: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The server answered with a status the caller treats as failure.
    #[error("server returned status {status}: {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body or a summary of it.
        message: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("response JSON decoding failed: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// A star position outside `0..=4` was requested.
    #[error("star index {index} is out of range (expected 0 to 4)")]
    InvalidStarIndex {
        /// The rejected index.
        index: usize,
    },

    /// A rating outside `1..=5` was supplied.
    #[error("rating {value} is out of range (expected 1 to 5)")]
    InvalidRating {
        /// The rejected rating.
        value: u8,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
