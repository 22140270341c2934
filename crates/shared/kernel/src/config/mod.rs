use config::{Config, Environment, File};
use courier_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[courier_derive::courier_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file, then overlays environment overrides.
///
/// 1. **Base file**: `path`, or `courier` in the working directory when `None`. Any
///    format the `config` crate recognises by extension (TOML, YAML, JSON).
/// 2. **Environment**: variables prefixed with `COURIER__`, nested with double
///    underscores (`COURIER__DISPATCH__MODE=parallel` sets `dispatch.mode`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or the merged values do
/// not deserialize into `T`.
///
/// # Example
/// ```rust
/// use courier_kernel::config::load_config;
/// use courier_kernel::domain::config::CourierConfig;
///
/// let cfg: CourierConfig = load_config(Some("config/local")).unwrap_or_default();
/// assert_eq!(cfg.logging.name, "courier");
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, env_overrides())
}

/// The `COURIER__SECTION__KEY` environment layer used by [`load_config`].
///
/// Pass it through [`Environment::source`] to overlay a fixed set of variables
/// instead of the process environment.
#[must_use]
pub fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
}

/// Same as [`load_config`] with an explicit environment layer.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or the merged values do
/// not deserialize into `T`.
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
