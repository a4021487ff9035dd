//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// HTTP server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The number of connections handled concurrently. Connections accepted
    /// beyond this wait for a free worker slot instead of being rejected.
    pub max_workers: usize,
    /// The directory the default responder serves files from.
    pub public_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:9999".parse().unwrap(),
            max_workers: 64,
            public_root: PathBuf::from("public"),
        }
    }
}
