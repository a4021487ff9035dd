//! MIME type detection for served files.
//!
//! Detection is by file extension only and can fail. The caller decides
//! what an unknown type means; this server omits the Content-Type header
//! rather than inventing a default.

use std::path::Path;

/// Guess the MIME type of `path` from its extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use microserve_rs::server::mime;
///
/// assert_eq!(mime::guess(Path::new("public/index.html")), Some("text/html"));
/// assert_eq!(mime::guess(Path::new("public/notes.xyz")), None);
/// ```
pub fn guess(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html" | "htm") => Some("text/html"),
        Some("css") => Some("text/css"),
        Some("txt") => Some("text/plain"),
        Some("js" | "mjs") => Some("application/javascript"),
        Some("json") => Some("application/json"),
        Some("png") => Some("image/png"),
        Some("jpg" | "jpeg") => Some("image/jpeg"),
        Some("gif") => Some("image/gif"),
        Some("svg") => Some("image/svg+xml"),
        Some("ico") => Some("image/x-icon"),
        _ => None,
    }
}
