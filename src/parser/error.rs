//! Error types for the request-line parser.

use thiserror::Error;

/// Errors that can occur while parsing an HTTP request line.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line does not consist of exactly three
    /// whitespace-separated tokens (method, path, protocol version).
    /// The offending line is carried for logging.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),
}
