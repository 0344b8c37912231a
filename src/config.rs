//! Server configuration from command-line flags and environment variables.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the Taskboard server.
///
/// Every flag falls back to a `TASKBOARD_*` environment variable, then to a
/// built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "taskboard", version, about = "Task management REST API")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "TASKBOARD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "TASKBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// `tracing` filter directive, e.g. `info` or `taskboard=debug,tower_http=info`.
    #[arg(long, env = "TASKBOARD_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    /// Returns the socket address to listen on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
