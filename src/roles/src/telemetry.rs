//! Tracing subscriber setup

use crate::config::LoggingSection;
use crate::error::{RoleError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`. With `json_logs` set
/// each event is written as one JSON object per line. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(logging: &LoggingSection) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| RoleError::Configuration(format!("Invalid log filter: {}", e)))?;

    let installed = if logging.json_logs {
        // JSON structured logging for production
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        // Human-readable logging for development
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_ansi(logging.colored_logs))
            .try_init()
    };

    installed.map_err(|e| RoleError::Configuration(format!("Failed to install subscriber: {}", e)))
}
