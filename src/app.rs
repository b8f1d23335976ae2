use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Overrides;

/// users-api - REST API over an in-memory user roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to (default: 127.0.0.1:3000)
    #[arg(short, long, env = "USERS_API_ADDR")]
    pub addr: Option<String>,
    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins (not recommended for production).
    /// Example: --cors-origins=https://app.example.com,http://localhost:5173
    #[arg(long, env = "USERS_API_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,
    /// Version reported by `GET /` (default: 1.0.0)
    #[arg(long, env = "USERS_API_VERSION")]
    pub service_version: Option<String>,
    /// Config file path (default: ~/.users-api/config.toml)
    #[arg(short, long, env = "USERS_API_CONFIG")]
    pub config: Option<PathBuf>,
    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "USERS_API_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "USERS_API_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,
    /// Custom log directory (default: ~/.users-api/logs)
    #[arg(long, env = "USERS_API_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Settings given on the command line or through the environment.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            addr: self.addr.clone(),
            cors_origins: self.cors_origins.clone(),
            version: self.service_version.clone(),
        }
    }
}

pub fn report_server_error(addr: std::net::SocketAddr, log_file: &Path, e: &std::io::Error) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of users-api may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill users-api");
        eprintln!("  2. Use a different port:        users-api --addr 127.0.0.1:3001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

/// Resolve once Ctrl-C is received.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, stopping server...");
}
