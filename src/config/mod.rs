//! Engine configuration sourced from the process environment.

use std::env;

use crate::error::{ArtError, Result};
use crate::logging::LogLevel;

/// Environment variable naming the maximum frame width in columns.
pub const MAX_WIDTH_VAR: &str = "TOTUZEN_MAX_WIDTH";

/// Environment variable naming the minimum log level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Default maximum frame width in terminal columns.
pub const DEFAULT_MAX_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_width: usize,
    pub log_level: LogLevel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            log_level: LogLevel::Info,
        }
    }
}

impl EngineConfig {
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Read configuration from the process environment.
    ///
    /// A malformed `TOTUZEN_MAX_WIDTH` is a hard configuration error; an
    /// unknown `LOG_LEVEL` name falls back to `Info`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var(MAX_WIDTH_VAR).ok().as_deref(),
            env::var(LOG_LEVEL_VAR).ok().as_deref(),
        )
    }

    fn from_vars(max_width: Option<&str>, log_level: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = max_width {
            config.max_width = raw.trim().parse().map_err(|_| {
                ArtError::Config(format!("{MAX_WIDTH_VAR} must be an integer, got `{raw}`"))
            })?;
        }
        if let Some(raw) = log_level {
            config.log_level = LogLevel::parse(raw).unwrap_or(LogLevel::Info);
        }
        Ok(config)
    }
}
