//! Facade crate for the `WebCfg` configuration subsystem.
//! Re-exports domain/kernel primitives and composes loading with validation.
//! Keep this crate thin: it should compose other crates, not implement
//! parsing or validation logic.
//!
//! ## Usage
//! ```rust,ignore
//! let config = webcfg::load(Some("config/web"))?;
//! if config.authentication.mode.is_form_based() {
//!     // wire up the login endpoint
//! }
//! ```

pub use webcfg_domain as domain;
pub use webcfg_kernel as kernel;

use std::path::Path;
use webcfg_domain::config::WebConfig;
use webcfg_kernel::config::{ConfigError, load_config};
use webcfg_kernel::validation::{TimeoutGuard, ValidationError};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced while assembling a validated configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A loaded value failed one of the kernel guards.
    #[error("rejected configuration value: {0}")]
    Validation(#[from] ValidationError),
}

/// Loads a [`WebConfig`] and runs the value guards over it.
///
/// Layering and defaults come from [`kernel::config::load_config`]; values
/// with a restricted range (currently the regex match timeout) are checked
/// before the configuration is handed out.
///
/// # Errors
/// Returns [`LoadError`] if the sources cannot be read or a value is out of
/// range.
pub fn load(path: Option<impl AsRef<Path>>) -> Result<WebConfig, LoadError> {
    let config: WebConfig = load_config(path)?;

    let timeout = TimeoutGuard::verify_millis(config.process_model.regex_match_timeout_ms)?;
    debug!("Accepted regex match timeout of {timeout:?}");

    Ok(config)
}
