//! Configuration-hierarchy value types.

use crate::token::token_serde;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Position of a configuration file relative to the application root.
///
/// Values are spaced by ten so intermediate levels can be introduced without
/// renumbering the existing ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum WebApplicationLevel {
    /// A machine- or site-level file above the application directory.
    AboveApplication = 10,
    #[default]
    AtApplication = 20,
    /// A file inside a subdirectory of the application.
    BelowApplication = 30,
}

token_serde!(WebApplicationLevel);
