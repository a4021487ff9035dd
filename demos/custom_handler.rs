//! A server example with a custom handler registered for one page.
//!
//! `/index.html` is answered by the handler below; every other whitelisted
//! path falls back to the static files under ./public. Run with
//! `RUST_LOG=info cargo run --example custom_handler`.

use std::sync::Arc;

use log::info;
use microserve_rs::{
    Handler, HandlerFuture, HandlerRegistry, HttpServer, Request, ResponseHead, ServerConfig,
    Whitelist,
};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Serves the front page itself instead of leaving it to the default
/// responder.
struct IndexPage;

impl Handler for IndexPage {
    fn handle<'a>(
        &'a self,
        request: &'a Request,
        out: &'a mut (dyn AsyncWrite + Unpin + Send),
    ) -> HandlerFuture<'a> {
        Box::pin(async move {
            info!("Custom handler invoked for {path}", path = request.path);

            let body = b"<html><body><h1>Served by a custom handler</h1></body></html>";
            ResponseHead::ok(Some("text/html"), body.len() as u64)
                .write_to(out)
                .await?;
            out.write_all(body).await?;
            out.flush().await
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let config = ServerConfig::default();
    let whitelist = Arc::new(Whitelist::default());

    // Register the handler; only GET registrations for whitelisted paths
    // take effect, so these two are silently ignored
    let mut registry = HandlerRegistry::new(Arc::clone(&whitelist));
    registry.register("GET", "/index.html", IndexPage);
    registry.register("POST", "/forms.html", IndexPage);
    registry.register("GET", "/admin.html", IndexPage);

    // Start the server
    let server = HttpServer::new(config, whitelist, registry);
    server.start().await?;

    Ok(())
}
