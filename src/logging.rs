use std::io::stdout;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;
use crate::error::AppError;

/// Sets up logging for the invocation.
///
/// Logs always go to a daily-rolling file (so the rendered output stays
/// clean); with `--debug` an additional stdout layer is attached. Returns
/// the log file path and the guard that must be kept alive for the
/// duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    debug: bool,
    log_file_override: Option<&str>,
) -> Result<(String, WorkerGuard), AppError> {
    // Config may carry a persistent custom log path; a CLI flag wins.
    let config_log_path = Config::load().await.ok().and_then(|c| c.log_file_path);

    let custom_log_path = log_file_override.or(config_log_path.as_deref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("matchday.log");
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::log_dir_path(), "matchday.log".to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive the program body so buffered records flush.
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(
            EnvFilter::from_default_env().add_directive(
                "matchday=info"
                    .parse()
                    .map_err(|e| AppError::log_setup_error(format!("Bad log directive: {e}")))?,
            ),
        );

    let registry = tracing_subscriber::registry().with(file_layer);
    if debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(
                        EnvFilter::from_default_env().add_directive(
                            "matchday=debug".parse().map_err(|e| {
                                AppError::log_setup_error(format!("Bad log directive: {e}"))
                            })?,
                        ),
                    ),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
