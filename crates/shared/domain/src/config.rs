use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level configuration consumed by the composition root.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CourierConfigInner {
    pub dispatch: DispatchConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
    pub alarm: AlarmConfig,
    pub sensor: SensorConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
///
/// Deserializes straight through [`CourierConfigInner`] so loaders that coerce
/// string values (environment overrides) reach the typed fields.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "CourierConfigInner")]
pub struct CourierConfig {
    inner: Arc<CourierConfigInner>,
}

impl From<CourierConfigInner> for CourierConfig {
    fn from(inner: CourierConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for CourierConfig {
    type Target = CourierConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CourierConfig {
    fn deref_mut(&mut self) -> &mut CourierConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// How a broadcast reaches its recipients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// One recipient after another, in registration order.
    #[default]
    Sequential,
    /// All recipients concurrently; completes when every recipient finished.
    Parallel,
}

/// What a sequential dispatch does after a recipient fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failure and propagate it; later recipients are not invoked.
    #[default]
    Halt,
    /// Invoke every recipient, then report all failures together.
    Continue,
}

/// How many recipients a sender keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// Registration appends; dispatch fans out to every recipient.
    #[default]
    Many,
    /// Registration replaces the previous recipient (capacity one).
    Single,
}

/// Broadcast dispatcher settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub mode: DispatchMode,
    pub on_error: FailurePolicy,
    /// Per-recipient timeout for parallel dispatch, in milliseconds.
    pub recipient_timeout_ms: Option<u64>,
}

impl DispatchConfig {
    #[must_use]
    pub fn recipient_timeout(&self) -> Option<Duration> {
        self.recipient_timeout_ms.filter(|&ms| ms > 0).map(Duration::from_millis)
    }
}

/// Registration store settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub policy: RegistrationPolicy,
}

/// Logging sink settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    pub level: String,
    pub env_filter: Option<String>,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

/// Alarm feature settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlarmConfig {
    /// Sound the siren on every alarm.
    pub siren: bool,
    /// Number dialed on every alarm; no dialer is wired when absent.
    pub dial_number: Option<String>,
}

/// Temperature sensor feature settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Thermostat set point in degrees Celsius.
    pub target_celsius: f64,
    /// Readings above this raise an alarm.
    pub alarm_threshold_celsius: f64,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "courier".to_owned(),
            level: "info".to_owned(),
            env_filter: None,
            console: true,
            path: None,
            json: false,
            max_files: 10,
        }
    }
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self { siren: true, dial_number: None }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self { target_celsius: 21.0, alarm_threshold_celsius: 60.0 }
    }
}
