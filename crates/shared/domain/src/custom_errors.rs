//! Error-page display policy values.

use crate::token::token_serde;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Controls when custom error pages replace raw error output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum CustomErrorsMode {
    /// Custom pages for remote clients, raw errors on the local machine.
    #[default]
    RemoteOnly = 0,
    On = 1,
    Off = 2,
}

impl CustomErrorsMode {
    /// Whether a remote client ever sees the custom error page.
    #[must_use]
    pub const fn shows_to_remote(self) -> bool {
        matches!(self, Self::RemoteOnly | Self::On)
    }
}

token_serde!(CustomErrorsMode);

/// Mechanism used to deliver the custom error page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum CustomErrorsRedirectMode {
    /// Client-visible redirect to the error page URL.
    #[default]
    ResponseRedirect = 0,
    /// Server-side rewrite; the original URL stays in the address bar.
    ResponseRewrite = 1,
}

token_serde!(CustomErrorsRedirectMode);
