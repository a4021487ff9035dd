//! HTTP request-line parser module.
//!
//! This module parses the one line of HTTP this server cares about: the
//! request line. Headers and bodies are deliberately never read.

mod request;
mod error;

// Re-export public items
pub use request::Request;
pub use error::Error;

// Re-export the parse_request_line function
pub use request::parse_request_line;
