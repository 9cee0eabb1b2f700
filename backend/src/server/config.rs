//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Inputs required to build the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_file: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and the path of
    /// the users data file.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, data_file: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            data_file: data_file.into(),
        }
    }
}
