use std::time::Duration;
use webcfg_kernel::validation::{MAX_TIMEOUT_MILLIS, TimeoutGuard, ValidationError};

#[test]
fn accepts_the_closed_interval() {
    assert_eq!(TimeoutGuard::verify_millis(0), Ok(Duration::ZERO));
    assert_eq!(TimeoutGuard::verify_millis(1), Ok(Duration::from_millis(1)));
    assert_eq!(TimeoutGuard::verify_millis(10_000), Ok(Duration::from_millis(10_000)));
    assert_eq!(
        TimeoutGuard::verify_millis(MAX_TIMEOUT_MILLIS),
        Ok(Duration::from_millis(2_147_483_646))
    );
}

#[test]
fn rejects_negative_durations() {
    assert_eq!(TimeoutGuard::verify_millis(-1), Err(ValidationError::NegativeTimeout(-1)));
    assert_eq!(
        TimeoutGuard::verify_millis(i64::MIN),
        Err(ValidationError::NegativeTimeout(i64::MIN))
    );
}

#[test]
fn rejects_values_at_or_above_i32_max() {
    // 2^31 - 1 ms is the first rejected value.
    assert_eq!(
        TimeoutGuard::verify_millis(2_147_483_647),
        Err(ValidationError::TimeoutTooLarge(2_147_483_647))
    );
    assert!(TimeoutGuard::verify_millis(i64::MAX).is_err());
}

#[test]
fn duration_form_checks_the_upper_bound() {
    assert_eq!(
        TimeoutGuard::verify(Duration::from_millis(2_147_483_646)),
        Ok(Duration::from_millis(2_147_483_646))
    );
    assert!(TimeoutGuard::verify(Duration::from_millis(2_147_483_647)).is_err());
    assert!(TimeoutGuard::verify(Duration::from_secs(u64::MAX / 1_000)).is_err());
}

#[test]
fn rejection_names_the_offending_value() {
    let err = TimeoutGuard::verify_millis(-5).unwrap_err();
    assert!(err.to_string().contains("-5"));

    let err = TimeoutGuard::verify_millis(MAX_TIMEOUT_MILLIS + 1).unwrap_err();
    assert!(err.to_string().contains("2147483647"));
}
