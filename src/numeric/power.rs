// ============================================================================
// Power Function
// x ** y with the edge cases pinned down
// ============================================================================

/// Raise `base` to `exponent`.
///
/// Follows C99 `pow` except where the instruction set pins down a fixed
/// answer:
/// - any `base` to a zero exponent is `1.0`, even NaN
/// - a NaN exponent gives NaN (C gives `1.0` for `pow(1, NaN)`)
/// - `(±1) ** ±∞` gives NaN (C gives `1.0`)
///
/// Negative bases with non-integer exponents are NaN; infinities follow
/// IEEE-754.
#[inline]
pub fn f64_pow(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        return 1.0;
    }
    if exponent.is_nan() || (exponent.is_infinite() && (base == 1.0 || base == -1.0)) {
        return f64::NAN;
    }
    base.powf(exponent)
}
