use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};
use super::{LogConfig, LOG_FILENAME};

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Build the env filter (runtime configurable via `RUST_LOG`).
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("users_api={}", config.log_level)))
}

/// One formatted output. Each output gets its own filter.
fn output_layer<W>(writer: W, config: &LogConfig, ansi: bool) -> OutputLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true);
    if config.json_format {
        layer
            .json()
            .with_current_span(true)
            .with_filter(env_filter(config))
            .boxed()
    } else {
        layer.with_ansi(ansi).with_filter(env_filter(config)).boxed()
    }
}

/// Initialize the logging system with the given configuration.
///
/// Logs go to both stdout and a rotating file in `config.log_dir`, either
/// human-readable or as JSON.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = RollingFileAppender::new(config.rotation.clone(), &config.log_dir, LOG_FILENAME);
    let outputs = vec![
        output_layer(file_appender, config, false),
        output_layer(std::io::stdout, config, true),
    ];
    tracing_subscriber::registry()
        .with(outputs)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
