// ============================================================================
// Unsigned Conversion Trait
// Abstract interface for u64 -> float conversion strategies
// ============================================================================

/// Converts unsigned 64-bit integers to floats.
///
/// Every implementation must round to nearest, ties to even, for all 2^64
/// inputs and both target widths. Strategies differ only in which hardware
/// conversions they are allowed to rely on.
///
/// # Thread Safety
/// Implementations are `Send + Sync` so a single static instance can be
/// shared by every kernel.
pub trait UnsignedConversion: Send + Sync {
    /// Convert to the nearest `f32`.
    fn u64_to_f32(&self, value: u64) -> f32;

    /// Convert to the nearest `f64`.
    fn u64_to_f64(&self, value: u64) -> f64;

    /// Name of this strategy.
    ///
    /// Used for logging, debugging, and benchmarking.
    fn name(&self) -> &'static str;
}
