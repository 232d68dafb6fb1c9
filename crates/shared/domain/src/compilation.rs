//! Compilation value types.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

bitflags! {
    /// Profile-guided optimization toggles for the compilation system.
    ///
    /// Flag-like on purpose: the empty set means no optimizations, and new
    /// individual toggles can be added without breaking the `All` token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ProfileGuidedOptimizations: u32 {
        const ALL = 1;
    }
}

impl Default for ProfileGuidedOptimizations {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for ProfileGuidedOptimizations {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            Self::ALL
        } else {
            // "none" and every unknown token fall back to no optimizations.
            Self::empty()
        }
    }
}

impl From<u32> for ProfileGuidedOptimizations {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for ProfileGuidedOptimizations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for ProfileGuidedOptimizations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
