//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufStream};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::parser::parse_request_line;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::{Handler, HandlerRegistry};
use crate::server::response::ResponseHead;
use crate::server::static_files::StaticFiles;
use crate::server::whitelist::Whitelist;

/// An HTTP server.
///
/// Accepts TCP connections and serves exactly one request per connection:
/// the request line is parsed, the path is checked against the whitelist,
/// and the request is dispatched to a registered handler or the default
/// static-file responder.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    whitelist: Arc<Whitelist>,
    registry: Arc<HandlerRegistry>,
    static_files: Arc<StaticFiles>,
}

impl HttpServer {
    /// Create a new HTTP server from its startup-time collaborators.
    ///
    /// The registry is taken by value: all registration happens before the
    /// server exists, and nothing can add a handler afterwards.
    pub fn new(config: ServerConfig, whitelist: Arc<Whitelist>, registry: HandlerRegistry) -> Self {
        let static_files = Arc::new(StaticFiles::new(config.public_root.clone()));
        Self {
            config,
            whitelist,
            registry: Arc::new(registry),
            static_files,
        }
    }

    /// Display the server banner and the servable paths.
    fn display_server_info(&self) {
        // Display the banner
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");

        // Display the servable paths
        info!("Servable paths:");
        for path in self.whitelist.iter() {
            if self.registry.lookup("GET", path).is_some() {
                info!("  GET {path} (custom handler)");
            } else {
                info!("  GET {path}");
            }
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Hand a newly accepted connection to a worker task.
    fn handle_new_connection(
        &self,
        mut socket: TcpStream,
        addr: SocketAddr,
        semaphore: Arc<Semaphore>,
        tasks: &mut JoinSet<()>,
    ) {
        // Clone references for the task
        let whitelist = self.whitelist.clone();
        let registry = self.registry.clone();
        let static_files = self.static_files.clone();

        tasks.spawn(async move {
            // Wait for a worker slot; accepted connections queue here rather
            // than being turned away. The permit is dropped when the task
            // completes, releasing the slot.
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return, // the semaphore is never closed
            };

            if let Err(e) =
                Self::handle_connection(&mut socket, &whitelist, &registry, &static_files).await
            {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Handle connection-accept errors.
    async fn handle_accept_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");

        // Accept errors are transient; wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        // Wait for all tasks to complete (with timeout)
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        // Display server information
        self.display_server_info();

        // Set up the TCP listener
        let listener = self.setup_listener().await?;

        // Create a semaphore that bounds how many connections are handled at once
        let semaphore = Arc::new(Semaphore::new(self.config.max_workers));

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                // Shut down on Ctrl+C
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C, shutting down server...");
                    break;
                }

                // Reap finished connection tasks as they complete
                Some(res) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = res {
                        error!("Connection task failed: {e}");
                    }
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            self.handle_new_connection(socket, addr, semaphore.clone(), &mut tasks);
                        },
                        Err(e) => {
                            Self::handle_accept_error(e).await;
                        }
                    }
                }
            }
        }

        // Perform graceful shutdown
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Handle a single connection: one request line, one response.
    ///
    /// The whitelist is checked before any routing. A request that passes
    /// it goes to the registered handler if there is one, otherwise to the
    /// static-file responder. The connection is closed after the response
    /// either way, which is why every response declares `Connection: close`.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin + Send),
        whitelist: &Whitelist,
        registry: &HandlerRegistry,
        static_files: &StaticFiles,
    ) -> Result<(), Error> {
        let mut stream = BufStream::new(socket);

        // Read the request line; headers and bodies are never parsed
        let mut line = String::new();
        let n = stream.read_line(&mut line).await?;
        if n == 0 {
            return Ok(()); // Connection closed before a request line arrived
        }

        // A malformed line gets no response at all, just a closed socket
        let request = parse_request_line(&line)?;
        info!("{method} {path}", method = request.method, path = request.path);

        // The whitelist gates everything, even paths with a registered handler
        if !whitelist.contains(&request.path) {
            ResponseHead::not_found().write_to(&mut stream).await?;
            stream.flush().await?;
            return Err(Error::NotFound(request.path));
        }

        // Single dispatch point: a registered handler wins, the static-file
        // responder is the fallback
        let handler: &dyn Handler = match registry.lookup(&request.method, &request.path) {
            Some(handler) => handler.as_ref(),
            None => static_files,
        };
        handler.handle(&request, &mut stream).await?;
        stream.flush().await?;

        Ok(())
    }
}
