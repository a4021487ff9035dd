//! A minimal static-site HTTP server library.
//!
//! This library serves a fixed whitelist of paths over HTTP/1.1 with a
//! focus on simplicity and predictability: one request line per connection,
//! one response, then the connection is closed.
//!
//! # Features
//!
//! - Parse HTTP request lines into a method and path
//! - Whitelist-gated routing; anything off the list is a `404 Not Found`
//! - Default static-file responder with MIME detection by extension
//! - One templated page whose `{time}` token is rendered per request
//! - Custom per-path GET handlers that take over the whole response
//! - Bounded worker pool on top of Tokio tasks
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use microserve_rs::parse_request_line;
//!
//! match parse_request_line("GET /index.html HTTP/1.1") {
//!     Ok(request) => {
//!         println!("Method: {}", request.method);
//!         println!("Path: {}", request.path);
//!     },
//!     Err(err) => {
//!         println!("Error parsing request line: {}", err);
//!     }
//! }
//! ```
//!
//! ## The whitelist and the registry
//!
//! ```
//! use std::sync::Arc;
//! use microserve_rs::{HandlerRegistry, Whitelist};
//!
//! let whitelist = Arc::new(Whitelist::default());
//! let registry = HandlerRegistry::new(Arc::clone(&whitelist));
//!
//! // Paths outside the whitelist are never served, and no handler is
//! // registered until you add one.
//! assert!(whitelist.contains("/index.html"));
//! assert!(!whitelist.contains("/admin.html"));
//! assert!(registry.lookup("GET", "/index.html").is_none());
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use std::sync::Arc;
//! use microserve_rs::{HandlerRegistry, HttpServer, ServerConfig, Whitelist};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let whitelist = Arc::new(Whitelist::default());
//!     let registry = HandlerRegistry::new(Arc::clone(&whitelist));
//!
//!     let server = HttpServer::new(ServerConfig::default(), whitelist, registry);
//!     server.start().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! See the `demos` directory for complete runnable programs, including one
//! that overrides a page with a custom handler.

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, Request, parse_request_line};
pub use server::{
    Error as ServerError, Handler, HandlerFuture, HandlerRegistry, HttpServer, ResponseHead,
    ServerConfig, StaticFiles, StatusCode, Whitelist,
};
