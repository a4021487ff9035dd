//! HTTP server implementation for microserve-rs.
//!
//! This module provides a small, whitelist-gated static-site server built
//! on Tokio, together with the handler seam used to override individual
//! pages.

mod response;
mod config;
mod error;
mod handler;
mod http_server;
mod static_files;
mod whitelist;

pub mod mime;

// Re-export public items
pub use response::{ResponseHead, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use handler::{Handler, HandlerFuture, HandlerRegistry};
pub use http_server::HttpServer;
pub use static_files::StaticFiles;
pub use whitelist::{Whitelist, DEMO_SITE_PATHS};
