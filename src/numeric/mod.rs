// ============================================================================
// Numeric Module
// Value-level semantics of the 64-bit integer/float instruction set
// ============================================================================
//
// This module provides:
// - Rounding: trunc / floor / ceil / nearest-even for f32 and f64
// - Conversions: u64/i64 -> float widening, range-checked and saturating
//   float -> u64/i64 narrowing
// - Division: signed/unsigned quotient and remainder with trap reporting
// - Bits: ctz, popcnt, rotations
// - Power: f64 pow with fixed edge cases
// - NumericError / TrapStatus: the failure vocabulary
//
// Design principles:
// - Pure functions of values; memory access lives in `kernel`
// - Fallible operations return Result (no panics, no host faults)
// - No allocation, no locking, no logging

mod bits;
mod conversion;
mod division;
mod errors;
mod power;
mod rounding;

pub use bits::{
    word32_ctz, word32_popcnt, word32_rol, word32_ror, word64_ctz, word64_popcnt, word64_rol,
    word64_ror,
};
pub use conversion::{
    f32_to_i64, f32_to_i64_sat, f32_to_u64, f32_to_u64_sat, f64_to_i64, f64_to_i64_sat,
    f64_to_u64, f64_to_u64_sat, i64_to_f32, i64_to_f64, u64_to_f32, u64_to_f64,
};
pub use division::{i64_div, i64_rem, u64_div, u64_rem};
pub use errors::{NumericError, NumericResult, TrapStatus};
pub use power::f64_pow;
pub use rounding::{
    f32_ceil, f32_floor, f32_nearest, f32_trunc, f64_ceil, f64_floor, f64_nearest, f64_trunc,
};
