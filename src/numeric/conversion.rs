// ============================================================================
// Integer/Float Conversions
// Widening (u64/i64 -> float) and range-checked narrowing (float -> u64/i64)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::platform::conversion::default_converter;

// Float images of the integer bounds. Each maximum rounds up to a power of
// two (2^63 or 2^64) that is itself out of range, so the upper test is `<`.
const I64_MIN_F32: f32 = i64::MIN as f32;
const I64_MAX_F32: f32 = i64::MAX as f32;
const U64_MAX_F32: f32 = u64::MAX as f32;
const I64_MIN_F64: f64 = i64::MIN as f64;
const I64_MAX_F64: f64 = i64::MAX as f64;
const U64_MAX_F64: f64 = u64::MAX as f64;

// ============================================================================
// Widening
// ============================================================================

/// Nearest `f32` to a signed 64-bit integer.
#[inline]
pub fn i64_to_f32(value: i64) -> f32 {
    value as f32
}

/// Nearest `f64` to a signed 64-bit integer.
#[inline]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Nearest `f32` to an unsigned 64-bit integer, via the detected strategy.
#[inline]
pub fn u64_to_f32(value: u64) -> f32 {
    default_converter().u64_to_f32(value)
}

/// Nearest `f64` to an unsigned 64-bit integer, via the detected strategy.
#[inline]
pub fn u64_to_f64(value: u64) -> f64 {
    default_converter().u64_to_f64(value)
}

// ============================================================================
// Narrowing (trapping)
// ============================================================================

/// Truncate toward zero into `i64`.
///
/// # Errors
/// Returns `Unrepresentable` for NaN, infinities and values outside
/// `[-2^63, 2^63)`.
#[inline]
pub fn f32_to_i64(value: f32) -> NumericResult<i64> {
    if value >= I64_MIN_F32 && value < I64_MAX_F32 {
        Ok(value as i64)
    } else {
        Err(NumericError::Unrepresentable)
    }
}

/// Truncate toward zero into `u64`.
///
/// Anything strictly above -1.0 truncates to a non-negative value, so
/// `-0.5` converts to 0.
///
/// # Errors
/// Returns `Unrepresentable` for NaN, infinities and values outside
/// `(-1, 2^64)`.
#[inline]
pub fn f32_to_u64(value: f32) -> NumericResult<u64> {
    if value > -1.0 && value < U64_MAX_F32 {
        Ok(value as u64)
    } else {
        Err(NumericError::Unrepresentable)
    }
}

/// Truncate toward zero into `i64`.
///
/// # Errors
/// Returns `Unrepresentable` for NaN, infinities and values outside
/// `[-2^63, 2^63)`.
#[inline]
pub fn f64_to_i64(value: f64) -> NumericResult<i64> {
    if value >= I64_MIN_F64 && value < I64_MAX_F64 {
        Ok(value as i64)
    } else {
        Err(NumericError::Unrepresentable)
    }
}

/// Truncate toward zero into `u64`.
///
/// # Errors
/// Returns `Unrepresentable` for NaN, infinities and values outside
/// `(-1, 2^64)`.
#[inline]
pub fn f64_to_u64(value: f64) -> NumericResult<u64> {
    if value > -1.0 && value < U64_MAX_F64 {
        Ok(value as u64)
    } else {
        Err(NumericError::Unrepresentable)
    }
}

// ============================================================================
// Narrowing (saturating)
// ============================================================================

/// Truncate toward zero, clamping to the `i64` range; NaN becomes 0.
#[inline]
pub fn f32_to_i64_sat(value: f32) -> i64 {
    value as i64
}

/// Truncate toward zero, clamping to the `u64` range; NaN becomes 0.
#[inline]
pub fn f32_to_u64_sat(value: f32) -> u64 {
    value as u64
}

/// Truncate toward zero, clamping to the `i64` range; NaN becomes 0.
#[inline]
pub fn f64_to_i64_sat(value: f64) -> i64 {
    value as i64
}

/// Truncate toward zero, clamping to the `u64` range; NaN becomes 0.
#[inline]
pub fn f64_to_u64_sat(value: f64) -> u64 {
    value as u64
}
