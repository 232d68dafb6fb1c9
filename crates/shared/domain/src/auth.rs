//! Authentication and authorization value types.

use crate::token::token_serde;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Selects the authentication scheme enforced for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum AuthenticationMode {
    /// No authentication; every request is anonymous.
    None = 0,
    /// Integrated Windows authentication handled by the host.
    #[default]
    Windows = 1,
    /// Deprecated upstream; still parsed so legacy configuration loads.
    Passport = 2,
    /// Cookie-based forms authentication.
    Forms = 3,
}

impl AuthenticationMode {
    /// Whether this mode routes unauthenticated requests to a login form.
    #[must_use]
    pub const fn is_form_based(self) -> bool {
        matches!(self, Self::Forms)
    }
}

token_serde!(AuthenticationMode);

/// Verdict attached to one access-control rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum AuthorizationRuleAction {
    #[default]
    Deny = 0,
    Allow = 1,
}

token_serde!(AuthorizationRuleAction);

/// Storage format for forms-authentication credentials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum FormsAuthPasswordFormat {
    /// Plain text. Only acceptable behind an already-secured store.
    Clear = 0,
    #[default]
    SHA1 = 1,
    MD5 = 2,
}

token_serde!(FormsAuthPasswordFormat);

/// Protection applied to the forms-authentication cookie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum FormsProtection {
    /// Both encryption and validation.
    #[default]
    All = 0,
    None = 1,
    Encryption = 2,
    Validation = 3,
}

token_serde!(FormsProtection);
