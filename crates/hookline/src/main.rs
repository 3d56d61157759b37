//! Hookline CLI binary.
//!
//! This binary provides command-line access to Hookline's modes:
//! - Generate metadata for images and videos
//! - Refine a draft caption
//! - Spy on competitor posts
//! - Hunt live trends in a niche

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, RunStatus, execute};

    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };

    #[cfg(feature = "observability")]
    let provider = {
        use hookline::observability::{ObservabilityConfig, init_observability};
        init_observability(
            ObservabilityConfig::new("hookline")
                .with_log_level(level)
                .with_json_logs(cli.json_logs),
        )?
    };
    #[cfg(not(feature = "observability"))]
    cli::init_logging(level, cli.json_logs)?;

    let result = execute(cli).await;

    #[cfg(feature = "observability")]
    hookline::observability::shutdown_observability(provider);

    match result {
        Ok(RunStatus::Completed) => Ok(()),
        Ok(RunStatus::Cancelled) => {
            eprintln!("Cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Request failed");
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    }
}
