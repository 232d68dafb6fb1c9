//! Worker-process value types.

use crate::token::token_serde;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// COM authentication level requested by the worker process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum ComAuthenticationLevel {
    None = 0,
    Call = 1,
    #[default]
    Connect = 2,
    /// Let COM pick the level negotiated by its security blanket.
    Default = 3,
    Pkt = 4,
    PktIntegrity = 5,
    PktPrivacy = 6,
}

token_serde!(ComAuthenticationLevel);

/// COM impersonation level granted to callers of the worker process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum ComImpersonationLevel {
    Default = 0,
    Anonymous = 1,
    Delegate = 2,
    Identify = 3,
    #[default]
    Impersonate = 4,
}

token_serde!(ComImpersonationLevel);

/// Which worker-process events are written to the event log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum ProcessModelLogLevel {
    None = 0,
    All = 1,
    #[default]
    Errors = 2,
}

token_serde!(ProcessModelLogLevel);
