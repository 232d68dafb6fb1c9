//! Profile-property value types.

use crate::token::token_serde;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Strategy used to persist a profile property value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum SerializationMode {
    String = 0,
    Xml = 1,
    Binary = 2,
    /// Let the configured provider decide the representation.
    #[default]
    ProviderSpecific = 3,
}

token_serde!(SerializationMode);
