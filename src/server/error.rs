//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur while serving a single connection.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing the request line.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error on the socket or on a backing file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The requested path is not servable.
    #[error("Not found: {0}")]
    NotFound(String),
}
