use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Truncates an `f64` toward zero and converts it to an `i64`.
///
/// ## Errors
/// - `TypeError` for NaN and infinities.
/// - `Overflow` if the truncated value is outside the `i64` range.
///
/// ## Example
/// ```
/// use sapphire::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(3.9, 1).unwrap(), 3);
/// assert_eq!(f64_to_i64_truncated(-3.9, 1).unwrap(), -3);
///
/// let err = f64_to_i64_truncated(1e20, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 5 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("cannot convert {value:?} to an integer"),
                                             line });
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(truncated as i64)
}

/// Converts a non-negative `i64` exponent to `u32`.
///
/// ## Errors
/// Returns `Overflow` if the value is negative or larger than `u32::MAX`; no
/// integer power with such an exponent fits in an `i64` anyway (except for
/// trivial bases, which callers handle before converting).
///
/// ## Example
/// ```
/// use sapphire::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45, 5).unwrap(), 45);
///
/// let err = i64_to_u32_checked(i64::MAX, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 11 }));
/// ```
pub fn i64_to_u32_checked(value: i64, line: usize) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}

/// Converts an `i64` count to `usize`.
///
/// ## Errors
/// Returns `InvalidArgument` for negative counts and `Overflow` for counts
/// that do not fit in `usize`.
pub fn i64_to_usize_checked(value: i64, line: usize) -> EvalResult<usize> {
    if value < 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("count must not be negative, found {value}"),
                                                   line });
    }

    usize::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
