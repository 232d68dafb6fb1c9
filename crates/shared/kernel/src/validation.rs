use std::time::Duration;
use thiserror::Error;

/// Upper bound accepted for a regular-expression match timeout, in
/// milliseconds. One below `i32::MAX` so the accepted value always fits the
/// 32-bit millisecond counters used by downstream matchers.
pub const MAX_TIMEOUT_MILLIS: i64 = i32::MAX as i64 - 1;

/// Rejection produced when a candidate configuration value is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("timeout of {0} ms is negative")]
    NegativeTimeout(i64),
    #[error("timeout of {0} ms exceeds the maximum of {MAX_TIMEOUT_MILLIS} ms")]
    TimeoutTooLarge(i64),
}

/// Range guard for regular-expression match timeouts.
///
/// Accepts exactly the closed interval `[0 ms, MAX_TIMEOUT_MILLIS ms]`;
/// acceptance is silent, rejection carries the offending value.
#[derive(Debug)]
pub struct TimeoutGuard;

impl TimeoutGuard {
    /// Validates a configuration-sourced millisecond count and converts it
    /// into the accepted [`Duration`].
    ///
    /// # Errors
    /// Returns an error if the value is negative or above
    /// [`MAX_TIMEOUT_MILLIS`].
    pub const fn verify_millis(ms: i64) -> Result<Duration, ValidationError> {
        if ms < 0 {
            return Err(ValidationError::NegativeTimeout(ms));
        }
        if ms > MAX_TIMEOUT_MILLIS {
            return Err(ValidationError::TimeoutTooLarge(ms));
        }
        #[allow(clippy::cast_sign_loss)] // ms >= 0 checked above
        let accepted = Duration::from_millis(ms as u64);
        Ok(accepted)
    }

    /// Validates an already-constructed duration against the upper bound.
    ///
    /// `Duration` cannot be negative, so only the maximum applies here.
    ///
    /// # Errors
    /// Returns an error if the duration exceeds [`MAX_TIMEOUT_MILLIS`]
    /// milliseconds.
    pub fn verify(timeout: Duration) -> Result<Duration, ValidationError> {
        let ms = timeout.as_millis();
        if ms > MAX_TIMEOUT_MILLIS as u128 {
            return Err(ValidationError::TimeoutTooLarge(
                i64::try_from(ms).unwrap_or(i64::MAX),
            ));
        }
        Ok(timeout)
    }
}
