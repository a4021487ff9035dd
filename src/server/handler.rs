//! HTTP request handlers and routing.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;

use tokio::io::AsyncWrite;

use crate::parser::Request;
use crate::server::whitelist::Whitelist;

/// Type alias for the boxed future returned by a handler invocation.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = io::Result<()>> + Send + 'a>>;

/// A capability that writes the complete HTTP response for one request.
///
/// Once invoked, the handler owns the whole exchange: it must write a full,
/// well-formed response (status line, headers, blank line, body) to `out`.
/// The server does not inspect or touch what it writes, and closes the
/// connection afterwards, so the response should declare
/// `Connection: close` and an accurate `Content-Length`.
///
/// # Examples
///
/// ```
/// use microserve_rs::{Handler, HandlerFuture, Request};
/// use tokio::io::{AsyncWrite, AsyncWriteExt};
///
/// struct Teapot;
///
/// impl Handler for Teapot {
///     fn handle<'a>(
///         &'a self,
///         _request: &'a Request,
///         out: &'a mut (dyn AsyncWrite + Unpin + Send),
///     ) -> HandlerFuture<'a> {
///         Box::pin(async move {
///             let response = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok";
///             out.write_all(response).await
///         })
///     }
/// }
/// ```
pub trait Handler: Send + Sync {
    /// Write the response for `request` to `out`.
    fn handle<'a>(
        &'a self,
        request: &'a Request,
        out: &'a mut (dyn AsyncWrite + Unpin + Send),
    ) -> HandlerFuture<'a>;
}

/// Custom handlers registered against the whitelist, keyed by path and
/// scoped to the GET method.
///
/// The registry is populated single-threaded at startup and then handed to
/// the server by value; nothing can add a handler once the server owns it.
pub struct HandlerRegistry {
    whitelist: Arc<Whitelist>,
    get_handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// Create an empty registry over `whitelist`.
    pub fn new(whitelist: Arc<Whitelist>) -> Self {
        Self {
            whitelist,
            get_handlers: HashMap::new(),
        }
    }

    /// Register `handler` for the given method and path.
    ///
    /// Only GET registrations for whitelisted paths are accepted; anything
    /// else is silently ignored. Registering the same path twice keeps the
    /// later handler.
    pub fn register(&mut self, method: &str, path: &str, handler: impl Handler + 'static) {
        if method == "GET" && self.whitelist.contains(path) {
            self.get_handlers.insert(path.to_string(), Arc::new(handler));
        }
    }

    /// Look up the handler registered for the given method and path.
    ///
    /// `None` means the caller falls back to the default static-file
    /// responder; only GET requests can ever match.
    pub fn lookup(&self, method: &str, path: &str) -> Option<&Arc<dyn Handler>> {
        if method == "GET" {
            self.get_handlers.get(path)
        } else {
            None
        }
    }

    /// Iterate over the paths with a registered custom handler.
    pub fn registered_paths(&self) -> impl Iterator<Item = &str> {
        self.get_handlers.keys().map(String::as_str)
    }
}
