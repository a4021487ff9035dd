//! A basic server example: serve the bundled demo site with no custom handlers.
//!
//! Run with `RUST_LOG=info cargo run --example static_server` from the crate
//! root, then open http://127.0.0.1:9999/index.html.

use std::sync::Arc;

use microserve_rs::{HandlerRegistry, HttpServer, ServerConfig, Whitelist};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    // Default configuration: port 9999, 64 workers, files under ./public
    let config = ServerConfig::default();
    let whitelist = Arc::new(Whitelist::default());
    let registry = HandlerRegistry::new(Arc::clone(&whitelist));

    // Start the server
    let server = HttpServer::new(config, whitelist, registry);
    server.start().await?;

    Ok(())
}
