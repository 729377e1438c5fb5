// ============================================================================
// Bit Primitives
// Trailing-zero count, population count and rotations
// ============================================================================

/// Trailing zero bits; 32 for zero.
#[inline]
pub fn word32_ctz(value: u32) -> u32 {
    value.trailing_zeros()
}

/// Trailing zero bits; 64 for zero.
#[inline]
pub fn word64_ctz(value: u64) -> u32 {
    value.trailing_zeros()
}

/// Number of set bits.
#[inline]
pub fn word32_popcnt(value: u32) -> u32 {
    value.count_ones()
}

/// Number of set bits.
#[inline]
pub fn word64_popcnt(value: u64) -> u32 {
    value.count_ones()
}

/// Rotate left by `shift mod 32`.
#[inline]
pub fn word32_rol(value: u32, shift: u32) -> u32 {
    value.rotate_left(shift & 31)
}

/// Rotate right by `shift mod 32`.
#[inline]
pub fn word32_ror(value: u32, shift: u32) -> u32 {
    value.rotate_right(shift & 31)
}

/// Rotate left by `shift mod 64`.
#[inline]
pub fn word64_rol(value: u64, shift: u64) -> u64 {
    value.rotate_left((shift & 63) as u32)
}

/// Rotate right by `shift mod 64`.
#[inline]
pub fn word64_ror(value: u64, shift: u64) -> u64 {
    value.rotate_right((shift & 63) as u32)
}
