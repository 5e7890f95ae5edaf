//! Configuration management for the rickroller server.

use clap::Parser;

/// Command-line arguments for the rickroller server.
#[derive(Parser, Debug, Clone)]
#[command(name = "rickroller")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server exposing a Rick Roll video widget")]
pub struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "RICKROLLER_HOST")]
    pub host: String,

    /// HTTP port
    #[arg(short, long, default_value = "8080", env = "RICKROLLER_PORT")]
    pub port: u16,

    /// CORS policy applied to every route
    #[arg(long, value_enum, default_value = "permissive", env = "RICKROLLER_CORS")]
    pub cors: CorsMode,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, env = "RICKROLLER_DEBUG")]
    pub debug: bool,
}

/// CORS policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CorsMode {
    /// Any origin, method and header
    #[default]
    Permissive,
    /// No CORS headers at all
    Disabled,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors: CorsMode,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors: CorsMode::default(),
            debug: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            cors: args.cors,
            debug: args.debug,
        }
    }
}

impl Config {
    /// `host:port` as accepted by `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
