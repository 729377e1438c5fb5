// ============================================================================
// Rounding Primitives
// trunc / floor / ceil / nearest for f32 and f64
// ============================================================================
//
// All four are total: infinities and zeros pass through with their sign,
// NaN stays NaN. `nearest` breaks ties toward the even integer, which is
// not what `f32::round` does.

/// Round toward zero.
#[inline]
pub fn f32_trunc(value: f32) -> f32 {
    value.trunc()
}

/// Round toward negative infinity.
#[inline]
pub fn f32_floor(value: f32) -> f32 {
    value.floor()
}

/// Round toward positive infinity.
#[inline]
pub fn f32_ceil(value: f32) -> f32 {
    value.ceil()
}

/// Round to nearest, ties to even.
#[inline]
pub fn f32_nearest(value: f32) -> f32 {
    value.round_ties_even()
}

/// Round toward zero.
#[inline]
pub fn f64_trunc(value: f64) -> f64 {
    value.trunc()
}

/// Round toward negative infinity.
#[inline]
pub fn f64_floor(value: f64) -> f64 {
    value.floor()
}

/// Round toward positive infinity.
#[inline]
pub fn f64_ceil(value: f64) -> f64 {
    value.ceil()
}

/// Round to nearest, ties to even.
#[inline]
pub fn f64_nearest(value: f64) -> f64 {
    value.round_ties_even()
}
