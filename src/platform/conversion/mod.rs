// ============================================================================
// Unsigned Conversion Strategies
// u64 -> f32 / f64 with round-to-nearest-ties-even on every toolchain
//
// Implementations:
// - NativeConversion: the language cast
// - SplitWordConversion: high/low 32-bit halves with a rounding-bit fix
// ============================================================================

mod conformance;
mod detector;
mod native;
pub mod reference;
mod split_word;
mod traits;

pub use conformance::{
    verify_conformance, ConformanceFailure, FloatWidth, MAX_CONFORMANCE_SAMPLES,
};
pub use detector::{default_converter, ConversionStrategy};
pub use native::NativeConversion;
pub use split_word::SplitWordConversion;
pub use traits::UnsignedConversion;
