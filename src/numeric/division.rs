// ============================================================================
// Checked 64-bit Division
// Signed/unsigned quotient and remainder that report instead of faulting
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Signed truncating division.
///
/// # Errors
/// - `DivisionByZero` if `divisor == 0`
/// - `IntegerOverflow` for `i64::MIN / -1`, whose quotient is 2^63
#[inline]
pub fn i64_div(dividend: i64, divisor: i64) -> NumericResult<i64> {
    if divisor == 0 {
        return Err(NumericError::DivisionByZero);
    }
    if divisor == -1 && dividend == i64::MIN {
        return Err(NumericError::IntegerOverflow);
    }
    Ok(dividend / divisor)
}

/// Signed remainder, sign follows the dividend.
///
/// `i64::MIN % -1` is 0, not an overflow.
///
/// # Errors
/// Returns `DivisionByZero` if `divisor == 0`.
#[inline]
pub fn i64_rem(dividend: i64, divisor: i64) -> NumericResult<i64> {
    if divisor == 0 {
        return Err(NumericError::DivisionByZero);
    }
    Ok(dividend.wrapping_rem(divisor))
}

/// Unsigned division.
///
/// # Errors
/// Returns `DivisionByZero` if `divisor == 0`.
#[inline]
pub fn u64_div(dividend: u64, divisor: u64) -> NumericResult<u64> {
    dividend
        .checked_div(divisor)
        .ok_or(NumericError::DivisionByZero)
}

/// Unsigned remainder.
///
/// # Errors
/// Returns `DivisionByZero` if `divisor == 0`.
#[inline]
pub fn u64_rem(dividend: u64, divisor: u64) -> NumericResult<u64> {
    dividend
        .checked_rem(divisor)
        .ok_or(NumericError::DivisionByZero)
}
