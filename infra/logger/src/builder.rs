use crate::error::LoggerError;
use crate::{Logger, sinks};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_MAX_FILES: usize = 10;

/// Builder state before a name is given.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once named; the name prefixes rolling files.
#[derive(Debug)]
pub struct Named(String);

mod sealed {
    pub trait State {}
    impl State for super::Unnamed {}
    impl State for super::Named {}
}

#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) level: LevelFilter,
    pub(crate) env_filter: Option<String>,
    pub(crate) console: bool,
    pub(crate) path: Option<PathBuf>,
    pub(crate) rotation: Rotation,
    pub(crate) max_files: usize,
    pub(crate) json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            env_filter: None,
            console: true,
            path: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

/// Configures the global subscriber. `init` is only reachable once named.
#[derive(Debug)]
pub struct LoggerBuilder<S: sealed::State> {
    state: S,
    settings: Settings,
}

impl LoggerBuilder<Unnamed> {
    pub(crate) fn new() -> Self {
        Self { state: Unnamed, settings: Settings::default() }
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { state: Named(name.into()), settings: self.settings }
    }
}

impl LoggerBuilder<Named> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic directives such as `courier_dispatch=trace`; replaces `RUST_LOG`.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Directory for rolling log files; enables the file sink.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Writes the file sink as JSON lines. The console stays compact.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   an unparsable filter or when neither sink is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the file sink cannot be created.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.state;
        let settings = self.settings;

        if name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if settings.max_files == 0 {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        if !settings.console && settings.path.is_none() {
            return Err(LoggerError::invalid("Enable the console or give a log directory"));
        }

        let filter = env_filter(&settings)?;
        let mut layers = Vec::new();
        if settings.console {
            layers.push(sinks::console());
        }
        let guard = match &settings.path {
            Some(dir) => {
                let (layer, guard) = sinks::file(&name, dir, &settings)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, file = guard.is_some(), "Logging initialized");

        Ok(Logger { name, guard })
    }

    #[cfg(test)]
    pub(crate) const fn settings(&self) -> &Settings {
        &self.settings
    }
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder
            .parse(directives)
            .map_err(|err| LoggerError::invalid(format!("Invalid filter '{directives}': {err}"))),
    }
}
