use clap::Parser;

use matchday::cli::Cli;
use matchday::commands;
use matchday::config::Config;
use matchday::error::AppError;
use matchday::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The guard must live until exit so buffered log records flush.
    let _guard = match logging::setup_logging(cli.debug, cli.log_file.as_deref()).await {
        Ok((log_file_path, guard)) => {
            tracing::info!("Logs are being written to: {log_file_path}");
            Some(guard)
        }
        Err(e) => {
            // Logging is ambient; a broken log path should not block the query.
            eprintln!("Warning: log setup failed: {e}");
            None
        }
    };

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        if matches!(e, AppError::TeamNotFound { .. }) {
            eprintln!(
                "Try the full club name or its abbreviation, e.g. \"Manchester United\" or MUN."
            );
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load().await?;
    commands::dispatch(cli, config).await
}
