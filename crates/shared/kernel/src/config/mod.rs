use config::{Config, Environment, File};
use gate_domain::config::RulesConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[gate_derive::gate_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `gatecheck.toml`). If no path is provided,
///    it defaults to `"gatecheck"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `GATE__`.
///    Nested structures are accessed using double underscores (e.g., `GATE__USERNAME__BOUNDS__MIN_CHARS`
///    maps to `username.bounds.min_chars`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source. Defaults to the `gatecheck` file
///   in the current working directory.
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("gatecheck"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix("GATE").separator("__").convert_case(config::Case::Snake));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the validation rule set, tolerating a missing config file.
///
/// Unlike [`load_config`], the base file is only required when the caller names
/// one explicitly; with no file present the defaults plus any `GATE__`
/// environment overrides apply. Malformed files and overrides still fail loudly.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicitly named file is absent, or if
/// any layered source fails to deserialize into [`RulesConfig`].
pub fn load_rules(path: Option<impl AsRef<Path>>) -> Result<RulesConfig, ConfigError> {
    let (source, required) = match path {
        Some(p) => (p.as_ref().to_path_buf(), true),
        None => (PathBuf::from("gatecheck"), false),
    };

    let rules = Config::builder()
        .add_source(File::from(source.as_path()).required(required))
        .add_source(Environment::with_prefix("GATE").separator("__").convert_case(config::Case::Snake))
        .build()
        .context("Failed to build rules config")?
        .try_deserialize::<RulesConfig>()
        .context("Failed to deserialize rules config")?;

    Ok(rules)
}
