//! HTTP request-line parsing and representation.

use crate::parser::error::Error;

/// Represents a parsed HTTP request line.
///
/// Only the method and path are retained. This server never reads headers
/// or bodies, and the protocol-version token is required on the wire but
/// not kept: routing has no use for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token, verbatim from the wire
    pub method: String,
    /// The request path, verbatim from the wire
    pub path: String,
}

impl Request {
    /// Create a new request from already-parsed tokens.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method token
    /// * `path` - The request path
    ///
    /// # Returns
    ///
    /// A new request carrying both tokens verbatim
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

/// Parse a single HTTP request line.
///
/// The line must split into exactly three whitespace-separated tokens:
/// method, path, and protocol version. Anything else is rejected. The
/// method and version tokens are not validated beyond their presence, so
/// unknown methods pass through and routing decides what to do with them.
///
/// # Arguments
///
/// * `line` - The first line read from a connection, with or without the
///   trailing line terminator
///
/// # Returns
///
/// The parsed request, or an error if the line is malformed
///
/// # Examples
///
/// ```
/// use microserve_rs::parse_request_line;
///
/// let request = parse_request_line("GET /index.html HTTP/1.1").unwrap();
/// assert_eq!(request.method, "GET");
/// assert_eq!(request.path, "/index.html");
///
/// assert!(parse_request_line("GET /index.html").is_err());
/// ```
pub fn parse_request_line(line: &str) -> Result<Request, Error> {
    // Split the request line into method, path, and version
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(line.trim_end().to_string()));
    }

    // parts[2] is the version token; its presence is all that matters
    Ok(Request::new(parts[0], parts[1]))
}
