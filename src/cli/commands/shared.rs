//! Shared helpers for CLI commands

use crate::config::{Config, load_configuration};
use crate::Result;
use std::path::PathBuf;
use tracing::debug;

/// Set up structured logging from a verbosity count
///
/// An explicit `RUST_LOG` environment filter takes precedence over the flag.
pub fn setup_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bankops_processor={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", level);
}

/// Resolve the base directory argument into a validated configuration
pub fn load_command_config(base: &Option<PathBuf>) -> Result<Config> {
    let config = load_configuration(base.as_deref())?;
    debug!("Loaded configuration with base {:?}", config.paths.base);
    Ok(config)
}
