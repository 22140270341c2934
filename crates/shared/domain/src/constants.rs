//! Well-known names shared across crates.

/// Capability name for recipients that accept `notify(message)`.
pub const NOTIFY: &str = "notify";
/// Capability name for factories that accept `create_from(raw)`.
pub const CREATE: &str = "create";
/// Capability name for failure reporting sinks.
pub const REPORT: &str = "report";

/// Field of a [`crate::input::RawInput`] that carries the message discriminator.
pub const DISCRIMINATOR_FIELD: &str = "kind";

/// Default configuration file stem loaded by applications.
pub const DEFAULT_CONFIG_FILE: &str = "courier";
/// Prefix for environment overrides (`COURIER__DISPATCH__MODE=parallel`).
pub const ENV_PREFIX: &str = "COURIER";
