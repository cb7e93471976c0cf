//! Unwrap helpers with good error messages.
//!
//! Engine outcomes and validation results are unwrapped in tests through
//! these helpers so a failure points at the calling line and prints the
//! error or outcome that was actually produced.

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with the error on `Err`.
///
/// ```rust
/// use paddock_test_helpers::must;
///
/// let result: Result<i32, &str> = Ok(42);
/// assert_eq!(must(result), 42);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`, with a message including the error value.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` if `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap a `Result` with extra context in the panic message.
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{context}: {e:?}"),
    }
}

/// Assert two floats are within `tolerance` of each other.
///
/// # Panics
///
/// Panics when `|actual - expected| > tolerance` or either value is NaN.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!("assert_close: {actual} differs from {expected} by {diff} (tolerance {tolerance})");
    }
}
