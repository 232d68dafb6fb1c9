use config::{Case, Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while assembling the layered configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base file is missing, unreadable, or does not match the target type.
    #[error("failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layering:
/// 1. **Base file**: settings from a file (e.g. `web.toml`). Without an
///    explicit path the loader looks for the `web` file stem in the current
///    working directory.
/// 2. **Environment overrides**: values from variables prefixed with
///    `WEBCFG__`. Nested sections use double underscores, so
///    `WEBCFG__TRACE__ENABLED=true` maps to `trace.enabled`.
///
/// # Errors
/// Returns [`ConfigError`] if the base file cannot be found or the combined
/// sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("web"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix("WEBCFG").separator("__").convert_case(Case::Snake));

    info!("Loading configuration from {}", effective_path.display());

    Ok(builder.build()?.try_deserialize::<T>()?)
}
