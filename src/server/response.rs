//! HTTP response head types and serialization.

use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// HTTP status codes with their standard reason phrases.
///
/// Only the codes this server actually sends are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NotFound = 404,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// The head of an HTTP response: status line, headers, and the blank
/// separator line.
///
/// Bodies are never part of the head; callers stream them separately after
/// the head is written. Every head declares `Connection: close`, because
/// this server answers exactly one request per connection, and
/// `content_length` must match the byte length of whatever body follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    /// The HTTP status code
    pub status: StatusCode,
    /// The Content-Type header value; the header is omitted entirely when
    /// the type is unknown
    pub content_type: Option<String>,
    /// The Content-Length header value
    pub content_length: u64,
}

impl ResponseHead {
    /// Create a 200 head for a body of `content_length` bytes.
    pub fn ok(content_type: Option<&str>, content_length: u64) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: content_type.map(str::to_string),
            content_length,
        }
    }

    /// Create the fixed 404 head: zero-length body, no Content-Type.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: None,
            content_length: 0,
        }
    }

    /// Convert the head to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Add the status line
        let status_line = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status as u16,
            self.status.reason_phrase()
        );
        bytes.extend_from_slice(status_line.as_bytes());

        // Add the headers, in a fixed order
        if let Some(content_type) = &self.content_type {
            let header_line = format!("Content-Type: {content_type}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }
        let header_line = format!("Content-Length: {}\r\n", self.content_length);
        bytes.extend_from_slice(header_line.as_bytes());
        bytes.extend_from_slice(b"Connection: close\r\n");

        // Add the empty line that separates the head from the body
        bytes.extend_from_slice(b"\r\n");

        bytes
    }

    /// Write the serialized head to `out`.
    pub async fn write_to(&self, out: &mut (dyn AsyncWrite + Unpin + Send)) -> io::Result<()> {
        out.write_all(&self.to_bytes()).await
    }
}
