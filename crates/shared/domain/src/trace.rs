//! Trace-viewer value types.

use crate::token::token_serde;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Ordering applied to entries in the trace viewer.
///
/// Discriminants start at 1 to match the wire values the viewer has always
/// used for this attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum TraceDisplayMode {
    #[default]
    SortByTime = 1,
    SortByCategory = 2,
}

token_serde!(TraceDisplayMode);
