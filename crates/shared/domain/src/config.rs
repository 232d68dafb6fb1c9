use crate::auth::{
    AuthenticationMode, AuthorizationRuleAction, FormsAuthPasswordFormat, FormsProtection,
};
use crate::compilation::ProfileGuidedOptimizations;
use crate::custom_errors::{CustomErrorsMode, CustomErrorsRedirectMode};
use crate::hierarchy::WebApplicationLevel;
use crate::pages::{PagesEnableSessionState, XhtmlConformanceMode};
use crate::process_model::{ComAuthenticationLevel, ComImpersonationLevel, ProcessModelLogLevel};
use crate::profile::SerializationMode;
use crate::trace::TraceDisplayMode;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level web-application configuration shared across subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfigInner {
    /// Where this file sits in the configuration hierarchy.
    pub level: WebApplicationLevel,
    pub authentication: AuthenticationConfig,
    pub authorization: AuthorizationConfig,
    pub custom_errors: CustomErrorsConfig,
    pub pages: PagesConfig,
    pub process_model: ProcessModelConfig,
    pub compilation: CompilationConfig,
    pub profile: ProfileConfig,
    pub trace: TraceConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(flatten, default)]
    inner: Arc<WebConfigInner>,
}

impl Deref for WebConfig {
    type Target = WebConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for WebConfig {
    fn deref_mut(&mut self) -> &mut WebConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Authentication scheme selection plus the forms-specific knobs.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthenticationConfig {
    pub mode: AuthenticationMode,
    pub forms: FormsConfig,
}

/// Forms-authentication cookie and login settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub name: String,
    pub login_url: String,
    pub protection: FormsProtection,
    pub password_format: FormsAuthPasswordFormat,
    pub timeout_minutes: u32,
    pub require_ssl: bool,
}

/// Ordered access-control rules; the first match wins.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthorizationConfig {
    pub rules: Vec<AuthorizationRule>,
}

/// One allow/deny rule over users and roles.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthorizationRule {
    pub action: AuthorizationRuleAction,
    pub users: Vec<String>,
    pub roles: Vec<String>,
}

/// Error-page display policy.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CustomErrorsConfig {
    pub mode: CustomErrorsMode,
    pub redirect_mode: CustomErrorsRedirectMode,
    pub default_redirect: Option<String>,
}

/// Page-processing defaults.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub enable_session_state: PagesEnableSessionState,
    pub xhtml_conformance: XhtmlConformanceMode,
}

/// Worker-process settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessModelConfig {
    pub com_authentication_level: ComAuthenticationLevel,
    pub com_impersonation_level: ComImpersonationLevel,
    pub log_level: ProcessModelLogLevel,
    /// Regular-expression match timeout; validated by the kernel guard
    /// before use.
    pub regex_match_timeout_ms: i64,
}

/// Compilation-system settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompilationConfig {
    pub profile_guided_optimizations: ProfileGuidedOptimizations,
}

/// Profile-property persistence settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub serialization: SerializationMode,
}

/// Trace-viewer settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub enabled: bool,
    pub display_mode: TraceDisplayMode,
}

// --- Default ---

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            name: ".WEBCFG_AUTH".to_owned(),
            login_url: "login".to_owned(),
            protection: FormsProtection::default(),
            password_format: FormsAuthPasswordFormat::default(),
            timeout_minutes: 30,
            require_ssl: false,
        }
    }
}

impl Default for ProcessModelConfig {
    fn default() -> Self {
        Self {
            com_authentication_level: ComAuthenticationLevel::default(),
            com_impersonation_level: ComImpersonationLevel::default(),
            log_level: ProcessModelLogLevel::default(),
            regex_match_timeout_ms: 10_000,
        }
    }
}
