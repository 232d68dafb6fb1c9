//! Kernel utilities for the configuration subsystem.
//! Keep this crate lightweight; it provides the layered config loader, the
//! value guards that accept or reject candidate settings, and the parser for
//! browser/gateway capability entries.
//!
//! ## Config loading
//! ```rust,ignore
//! use webcfg_kernel::config::load_config;
//! use webcfg_kernel::domain::config::WebConfig;
//!
//! let cfg: WebConfig = load_config(Some("web"))?;
//! ```
//!
//! ## Validation
//! ```rust
//! use webcfg_kernel::validation::TimeoutGuard;
//!
//! assert!(TimeoutGuard::verify_millis(10_000).is_ok());
//! assert!(TimeoutGuard::verify_millis(-1).is_err());
//! ```

pub mod capabilities;
pub mod config;
pub mod validation;

pub use webcfg_domain as domain;
