// ============================================================================
// Split-Word Conversion
// u64 -> float using only 32-bit integer-to-float conversions
// ============================================================================

use super::traits::UnsignedConversion;

/// 2^32 as f64 (exact).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Conversion assembled from the two 32-bit halves of the input.
///
/// Some toolchains lower `u64 -> float` to a sequence that does not round
/// to nearest-even. This strategy uses only `u32 -> float`, which every
/// toolchain gets right, and arranges for exactly one inexact step:
///
/// - **f64**: `high * 2^32` and `low` are both exact in 53 bits, so the one
///   addition is the only rounding.
/// - **f32**: the high half is normalized so its leading one is the top bit
///   of a 32-bit window, and a rounding bit is ORed into the window's LSB
///   whenever any bit shifted out below it (the rest of the low half) is
///   set. Converting that window rounds once with full sticky information;
///   scaling by a power of two is exact.
///
/// Adding `f32(low)` to a pre-rounded `f32(high) * 2^k` instead rounds
/// twice and is off by one ulp for inputs such as
/// `(2^23 + 1) * 2^32 + 0x7fff_ffff`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitWordConversion;

impl SplitWordConversion {
    /// Create a new split-word converter.
    pub const fn new() -> Self {
        Self
    }
}

impl UnsignedConversion for SplitWordConversion {
    fn u64_to_f32(&self, value: u64) -> f32 {
        let high_word = (value >> 32) as u32;
        if high_word == 0 {
            return value as u32 as f32;
        }

        let zeros = high_word.leading_zeros();
        let normalized = value << zeros;
        let mut window = (normalized >> 32) as u32;

        // Set the rounding bit.
        if normalized as u32 != 0 {
            window |= 1;
        }

        // 2^(32 - zeros), built from its exponent field; never inexact.
        let scale = f32::from_bits((127 + 32 - zeros) << 23);
        window as f32 * scale
    }

    fn u64_to_f64(&self, value: u64) -> f64 {
        let low_word = value as u32;
        let high_word = (value >> 32) as u32;

        f64::from(high_word) * TWO_POW_32 + f64::from(low_word)
    }

    fn name(&self) -> &'static str {
        "SplitWord"
    }
}

#[cfg(test)]
mod tests {
    use super::super::reference;
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    fn boundary_values() -> Vec<u64> {
        let mut values = vec![
            0,
            1,
            u32::MAX as u64,
            1 << 32,
            (1 << 32) + 1,
            u64::MAX,
            u64::MAX - 1,
            ((1 << 23) + 1) << 32 | 0x7fff_ffff,
            ((1 << 23) + 1) << 32 | 0x8000_0000,
            0x8000_0080_0000_0000,
            0x8000_0080_0000_0001,
            0x8000_0180_0000_0000,
            0xffff_ff7f_ffff_ffff,
            0xffff_ff80_0000_0000,
            0x0020_0000_0000_0001,
            0x0020_0000_0000_0003,
        ];
        for k in 0..64u32 {
            let p = 1u64 << k;
            values.extend([p, p.wrapping_sub(1), p.wrapping_add(1)]);
        }
        values
    }

    #[test]
    fn test_boundaries_match_reference() {
        let converter = SplitWordConversion::new();
        for value in boundary_values() {
            assert_eq!(
                converter.u64_to_f32(value).to_bits(),
                reference::u64_to_f32_bits(value),
                "f32 mismatch for {value:#x}"
            );
            assert_eq!(
                converter.u64_to_f64(value).to_bits(),
                reference::u64_to_f64_bits(value),
                "f64 mismatch for {value:#x}"
            );
        }
    }

    #[test]
    fn test_double_rounding_case() {
        // Just below the midpoint of (2^23 + 1) * 2^32 and (2^23 + 2) * 2^32.
        let value = ((1u64 << 23) + 1) << 32 | 0x7fff_ffff;
        let expected = ((1u64 << 23) + 1) << 32;
        assert_eq!(SplitWordConversion::new().u64_to_f32(value), expected as f32);
    }

    #[test]
    fn test_max_rounds_to_two_pow_64() {
        let converter = SplitWordConversion::new();
        assert_eq!(converter.u64_to_f64(u64::MAX), 18_446_744_073_709_551_616.0);
        assert_eq!(converter.u64_to_f32(u64::MAX), 18_446_744_073_709_551_616.0);
    }

    #[test]
    fn test_split_word_name() {
        assert_eq!(SplitWordConversion::new().name(), "SplitWord");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(4096))]

        #[test]
        fn prop_f32_matches_reference(value in any::<u64>()) {
            let converter = SplitWordConversion::new();
            prop_assert_eq!(converter.u64_to_f32(value).to_bits(), reference::u64_to_f32_bits(value));
        }

        #[test]
        fn prop_f64_matches_reference(value in any::<u64>()) {
            let converter = SplitWordConversion::new();
            prop_assert_eq!(converter.u64_to_f64(value).to_bits(), reference::u64_to_f64_bits(value));
        }

        // Uniform u64s almost never land in the lower binades; walk them explicitly.
        #[test]
        fn prop_f32_matches_reference_per_binade(bits in 1u32..=64, raw in any::<u64>()) {
            let value = raw >> (64 - bits) | 1u64 << (bits - 1);
            let converter = SplitWordConversion::new();
            prop_assert_eq!(converter.u64_to_f32(value).to_bits(), reference::u64_to_f32_bits(value));
        }
    }

    quickcheck! {
        fn qc_split_word_agrees_with_native(value: u64) -> bool {
            let converter = SplitWordConversion::new();
            converter.u64_to_f32(value) == value as f32 && converter.u64_to_f64(value) == value as f64
        }
    }
}
