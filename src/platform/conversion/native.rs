// ============================================================================
// Native Conversion
// Relies on the language's integer-to-float cast
// ============================================================================

use super::traits::UnsignedConversion;

/// Conversion through the `as` cast.
///
/// Rust defines `u64 as f32` / `u64 as f64` as round-to-nearest-ties-even
/// on every target, so this is the preferred strategy wherever it lowers to
/// a conforming instruction sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeConversion;

impl NativeConversion {
    /// Create a new native converter.
    pub const fn new() -> Self {
        Self
    }
}

impl UnsignedConversion for NativeConversion {
    #[inline]
    fn u64_to_f32(&self, value: u64) -> f32 {
        value as f32
    }

    #[inline]
    fn u64_to_f64(&self, value: u64) -> f64 {
        value as f64
    }

    fn name(&self) -> &'static str {
        "Native"
    }
}
