// ============================================================================
// Platform Module
// Toolchain-specific behavior the numeric kernel has to correct for
//
// This module contains:
// - Unsigned 64-bit to float conversion strategies (native cast and a
//   split-word fallback built only from 32-bit conversions)
// - An exact integer reference rounding and a conformance self-check
//
// Usage:
// ```ignore
// use numeric_kernel::platform::{ConversionStrategy, UnsignedConversion};
// let converter = ConversionStrategy::detect().converter();
// ```
// ============================================================================

pub mod conversion;

pub use conversion::{
    default_converter, verify_conformance, ConformanceFailure, ConversionStrategy, FloatWidth,
    NativeConversion, SplitWordConversion, UnsignedConversion,
};
