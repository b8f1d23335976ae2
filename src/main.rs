use clap::Parser;
use color_eyre::eyre::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use users_api::app::{report_server_error, shutdown_signal, Args};
use users_api::config::{default_config_path, load_config, Settings};
use users_api::logging::{default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use users_api::{build_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    let log_file = log_dir.join(LOG_FILENAME);
    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let file_config = load_config(&config_path)?;
    let settings = Settings::resolve(args.overrides(), file_config);
    let addr: SocketAddr = settings.addr.parse()?;

    info!("CORS origins: {}", settings.cors_origins.join(", "));

    let state = AppState::seeded(&settings.version);
    let app = build_app(state, settings.cors_origins);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting users-api {} on {}", settings.version, addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("users-api stopped");
    Ok(())
}
