// ============================================================================
// Reference Rounding
// Integer-only round-to-nearest-ties-even of u64 into IEEE-754 bit patterns
// ============================================================================
//
// Nothing here touches a floating-point conversion instruction: the
// significand is rounded with integer arithmetic and the result is assembled
// directly from sign, exponent and mantissa fields. That makes it a usable
// oracle for the strategies that do rely on hardware conversions.

const F32_PRECISION: u32 = 24;
const F32_BIAS: u64 = 127;
const F64_PRECISION: u32 = 53;
const F64_BIAS: u64 = 1023;

/// Round `value` to `precision` significant bits, ties to even.
///
/// Returns `(significand, exponent)` with `value ≈ significand * 2^exponent`
/// and `significand < 2^precision`.
pub fn round_significand(value: u64, precision: u32) -> (u64, u32) {
    let bits = u64::BITS - value.leading_zeros();
    if bits <= precision {
        return (value, 0);
    }

    let shift = bits - precision;
    let mut significand = value >> shift;
    let remainder = value & ((1u64 << shift) - 1);
    let half = 1u64 << (shift - 1);

    if remainder > half || (remainder == half && significand & 1 == 1) {
        significand += 1;
    }

    // Carry out of the top bit: 0b111..1 rounded up to a power of two.
    if significand == 1u64 << precision {
        (significand >> 1, shift + 1)
    } else {
        (significand, shift)
    }
}

fn assemble(value: u64, precision: u32, bias: u64) -> u64 {
    if value == 0 {
        return 0;
    }

    let (significand, exponent) = round_significand(value, precision);
    let lead = u64::BITS - 1 - significand.leading_zeros();
    let unbiased = u64::from(lead + exponent);
    let mantissa_bits = precision - 1;
    let mantissa = (significand << (mantissa_bits - lead)) & ((1u64 << mantissa_bits) - 1);

    ((unbiased + bias) << mantissa_bits) | mantissa
}

/// Bit pattern of the `f32` nearest to `value`.
pub fn u64_to_f32_bits(value: u64) -> u32 {
    assemble(value, F32_PRECISION, F32_BIAS) as u32
}

/// Bit pattern of the `f64` nearest to `value`.
pub fn u64_to_f64_bits(value: u64) -> u64 {
    assemble(value, F64_PRECISION, F64_BIAS)
}

/// The `f32` nearest to `value`.
pub fn u64_to_f32(value: u64) -> f32 {
    f32::from_bits(u64_to_f32_bits(value))
}

/// The `f64` nearest to `value`.
pub fn u64_to_f64(value: u64) -> f64 {
    f64::from_bits(u64_to_f64_bits(value))
}
