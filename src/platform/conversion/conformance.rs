// ============================================================================
// Conformance Self-Check
// Verifies a conversion strategy against the integer reference
// ============================================================================

use super::reference;
use super::traits::UnsignedConversion;
use std::fmt;

/// Upper bound on pseudo-random samples a single check may request.
pub const MAX_CONFORMANCE_SAMPLES: usize = 1 << 24;

/// Target float width of a failed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

impl fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatWidth::F32 => write!(f, "f32"),
            FloatWidth::F64 => write!(f, "f64"),
        }
    }
}

/// First input on which a strategy disagreed with the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConformanceFailure {
    /// Strategy under test
    pub strategy: &'static str,
    /// Offending input
    pub input: u64,
    /// Target width that misrounded
    pub width: FloatWidth,
    /// Correctly rounded bit pattern
    pub expected_bits: u64,
    /// Bit pattern the strategy produced
    pub actual_bits: u64,
}

impl fmt::Display for ConformanceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} conversion misrounds {:#x} to {}: expected bits {:#x}, got {:#x}",
            self.strategy, self.input, self.width, self.expected_bits, self.actual_bits
        )
    }
}

impl std::error::Error for ConformanceFailure {}

/// Inputs where rounding decisions are most likely to go wrong.
///
/// Powers of two and their neighbours, the exact midpoints between adjacent
/// f32 and f64 values in every binade (and one either side), the top of the
/// range, and inputs known to break a double-rounding split-word scheme.
fn boundary_inputs() -> Vec<u64> {
    let mut inputs = vec![
        u64::MAX,
        u64::MAX - 1,
        ((1 << 23) + 1) << 32 | 0x7fff_ffff,
        ((1 << 23) + 3) << 32 | 0x7fff_ffff,
        0xffff_ff7f_ffff_ffff,
        0xffff_fbff_ffff_ffff,
    ];

    for k in 0..64u32 {
        let power = 1u64 << k;
        inputs.extend([power.wrapping_sub(1), power, power.wrapping_add(1)]);

        for precision in [24u32, 53] {
            if k >= precision {
                // Half an ulp above 2^k, and above the next representable value.
                let half_ulp = 1u64 << (k - precision);
                for base in [power, power + 2 * half_ulp] {
                    let midpoint = base + half_ulp;
                    inputs.extend([midpoint - 1, midpoint, midpoint + 1]);
                }
            }
        }
    }

    inputs
}

/// SplitMix64: deterministic, seedable, good enough to spread samples.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn check_one(converter: &dyn UnsignedConversion, input: u64) -> Result<(), ConformanceFailure> {
    let expected32 = reference::u64_to_f32_bits(input);
    let actual32 = converter.u64_to_f32(input).to_bits();
    if expected32 != actual32 {
        return Err(ConformanceFailure {
            strategy: converter.name(),
            input,
            width: FloatWidth::F32,
            expected_bits: u64::from(expected32),
            actual_bits: u64::from(actual32),
        });
    }

    let expected64 = reference::u64_to_f64_bits(input);
    let actual64 = converter.u64_to_f64(input).to_bits();
    if expected64 != actual64 {
        return Err(ConformanceFailure {
            strategy: converter.name(),
            input,
            width: FloatWidth::F64,
            expected_bits: expected64,
            actual_bits: actual64,
        });
    }

    Ok(())
}

/// Check `converter` on every boundary input plus `samples` pseudo-random
/// inputs spread across all binades.
///
/// `samples` is clamped to `MAX_CONFORMANCE_SAMPLES`.
///
/// # Errors
/// Returns the first input that does not round to nearest, ties to even.
pub fn verify_conformance(
    converter: &dyn UnsignedConversion,
    samples: usize,
) -> Result<(), ConformanceFailure> {
    for input in boundary_inputs() {
        check_one(converter, input)?;
    }

    let mut state = 0x5eed_0f_c0ffee_u64;
    for _ in 0..samples.min(MAX_CONFORMANCE_SAMPLES) {
        let raw = splitmix64(&mut state);
        // Random bit length so small magnitudes get as much coverage as large.
        let shift = (raw & 63) as u32;
        check_one(converter, splitmix64(&mut state) >> shift)?;
    }

    tracing::debug!(
        strategy = converter.name(),
        samples,
        "conversion strategy conforms to round-to-nearest-even"
    );
    Ok(())
}
