//! The fixed set of request paths the server is willing to serve.

use std::collections::HashSet;

/// Request paths of the demo site bundled under `public/`.
pub const DEMO_SITE_PATHS: [&str; 11] = [
    "/index.html",
    "/spring.svg",
    "/spring.png",
    "/resources.html",
    "/styles.css",
    "/app.js",
    "/links.html",
    "/forms.html",
    "/classic.html",
    "/events.html",
    "/events.js",
];

/// The set of servable request paths.
///
/// Built once at startup and shared read-only for the lifetime of the
/// server. Every request is checked against this set before any routing
/// happens: a path outside it is answered with `404 Not Found` no matter
/// what exists on disk or in the handler registry.
#[derive(Debug, Clone)]
pub struct Whitelist {
    paths: HashSet<String>,
}

impl Whitelist {
    /// Create a whitelist from any collection of path strings.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether `path` is servable.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over the servable paths, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// The number of servable paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check whether the whitelist is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for Whitelist {
    /// The demo-site path set.
    fn default() -> Self {
        Self::new(DEMO_SITE_PATHS)
    }
}
