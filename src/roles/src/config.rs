//! Configuration loading and validation

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `store.database_url`
pub const DATABASE_URL_ENV: &str = "ROLES_DATABASE_URL";

/// Environment variable overriding `logging.level`
pub const LOG_LEVEL_ENV: &str = "ROLES_LOG_LEVEL";

/// Complete role subsystem configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RolesConfig {
    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            database_url: None,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub colored_logs: bool,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            colored_logs: true,
            json_logs: false,
        }
    }
}

fn default_true() -> bool { true }
fn default_max_connections() -> u32 { 25 }
fn default_min_connections() -> u32 { 5 }
fn default_acquire_timeout() -> u64 { 3 }
fn default_log_level() -> String { "info".to_string() }

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl RolesConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: RolesConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `ROLES_DATABASE_URL` / `ROLES_LOG_LEVEL` overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(DATABASE_URL_ENV).ok(),
            std::env::var(LOG_LEVEL_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, database_url: Option<String>, log_level: Option<String>) {
        if let Some(url) = database_url.filter(|u| !u.is_empty()) {
            self.store.database_url = Some(url);
        }
        if let Some(level) = log_level.filter(|l| !l.is_empty()) {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.store.backend == StoreBackend::Postgres {
            match self.store.database_url.as_deref() {
                None | Some("") => bail!("store.database_url is required for the postgres backend"),
                Some(_) => {}
            }
        }

        if self.store.max_connections == 0 {
            bail!("store.max_connections must be at least 1");
        }

        if self.store.min_connections > self.store.max_connections {
            bail!(
                "store.min_connections ({}) exceeds store.max_connections ({})",
                self.store.min_connections,
                self.store.max_connections
            );
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            bail!("Invalid log level: {}", self.logging.level);
        }

        Ok(())
    }
}
