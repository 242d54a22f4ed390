use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Accepts `value` only if it is finite.
///
/// This is the point where the `NaN` produced by a division by zero, or an
/// overflow to infinity, becomes an error.
///
/// ## Errors
/// Returns `EvalError::NonFiniteResult` for `NaN`, `inf` and `-inf`.
///
/// ## Example
/// ```
/// use reckon::{error::EvalError, util::num::ensure_finite};
///
/// assert_eq!(ensure_finite(2.5), Ok(2.5));
/// assert!(matches!(ensure_finite(f64::INFINITY),
///                  Err(EvalError::NonFiniteResult { .. })));
/// ```
pub fn ensure_finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFiniteResult { value })
    }
}

/// Formats a result the way a calculator display shows it.
///
/// Whole numbers print without a fractional part and negative zero prints as
/// `0`.
///
/// ## Example
/// ```
/// use reckon::util::num::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(-0.0), "0");
/// assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
