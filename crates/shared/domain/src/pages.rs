//! Page-processing value types.

use crate::token::token_serde;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Session-state access granted to pages.
///
/// `ReadOnly` sits between the two boolean tokens, so the configuration
/// format accepts `false`, `ReadOnly`, and `true` for this attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum PagesEnableSessionState {
    False = 0,
    ReadOnly = 1,
    #[default]
    True = 2,
}

impl PagesEnableSessionState {
    /// Whether pages may read session state at all.
    #[must_use]
    pub const fn is_readable(self) -> bool {
        !matches!(self, Self::False)
    }

    /// Whether pages may write session state.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::True)
    }
}

token_serde!(PagesEnableSessionState);

/// Strictness of the markup emitted by the page renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum XhtmlConformanceMode {
    #[default]
    Transitional = 0,
    /// Pre-conformance rendering kept for old controls.
    Legacy = 1,
    Strict = 2,
}

token_serde!(XhtmlConformanceMode);
