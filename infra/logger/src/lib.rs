//! # Logger
//!
//! Installs the global `tracing` subscriber for courier binaries: an `EnvFilter`,
//! a compact console layer and an optional rolling file layer (plain or JSON)
//! written through a non-blocking worker.
//!
//! Configure it from [`LoggingConfig`] with [`Logger::from_config`], or in code with
//! the builder. `RUST_LOG` still applies when no explicit filter is set.
//!
//! ```rust
//! use courier_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("courier-doc")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```
//!
//! [`LoggingConfig`]: courier_domain::config::LoggingConfig

mod builder;
mod error;
mod sinks;

pub use crate::builder::{LoggerBuilder, Named, Unnamed};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use courier_domain::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed subscriber.
///
/// Holds the file worker guard; keep it alive until shutdown so buffered
/// lines are flushed.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder<Unnamed> {
        LoggerBuilder::new()
    }

    /// Installs the subscriber described by a `[logging]` config section.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level, a bad filter, an empty
    /// name or no enabled sink; [`LoggerError::Subscriber`] when a subscriber is
    /// already installed.
    pub fn from_config(config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = config.level.trim().parse::<LevelFilter>().map_err(|err| {
            LoggerError::invalid(format!("Unknown level '{}': {err}", config.level))
        })?;

        let mut builder = Self::builder()
            .name(config.name.clone())
            .level(level)
            .console(config.console)
            .max_files(config.max_files)
            .json(config.json);
        if let Some(filter) = &config.env_filter {
            builder = builder.env_filter(filter.clone());
        }
        if let Some(path) = &config.path {
            builder = builder.path(path.clone());
        }
        builder.init()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` when a file sink is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(logger = %self.name, "Flushing log sinks");
        }
    }
}
