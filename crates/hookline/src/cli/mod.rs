//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the hookline binary.

mod commands;
mod progress;
mod run;

pub use commands::Cli;
pub use run::{RunStatus, execute};

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins over `level` when set.
#[cfg(not(feature = "observability"))]
pub fn init_logging(level: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| e as Box<dyn std::error::Error>)
}

#[cfg(all(test, not(feature = "observability")))]
mod tests {
    use super::*;

    #[test]
    fn second_logging_install_is_an_error() {
        assert!(init_logging("warn", false).is_ok());
        assert!(init_logging("debug", true).is_err());
    }
}
