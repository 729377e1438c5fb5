// ============================================================================
// Strategy Detection
// Picks the unsigned conversion strategy for the current toolchain
// ============================================================================

use super::native::NativeConversion;
use super::split_word::SplitWordConversion;
use super::traits::UnsignedConversion;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static NATIVE: NativeConversion = NativeConversion::new();
static SPLIT_WORD: SplitWordConversion = SplitWordConversion::new();

/// Which unsigned conversion strategy a kernel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConversionStrategy {
    /// Language cast
    Native,
    /// 32-bit halves with a rounding-bit correction
    SplitWord,
}

impl ConversionStrategy {
    /// Strategy for the toolchain this crate was compiled with.
    ///
    /// MSVC targets use the split-word path; everything else trusts the
    /// native cast.
    #[inline]
    pub fn detect() -> Self {
        if cfg!(target_env = "msvc") {
            ConversionStrategy::SplitWord
        } else {
            ConversionStrategy::Native
        }
    }

    /// Shared converter instance for this strategy.
    #[inline]
    pub fn converter(self) -> &'static dyn UnsignedConversion {
        match self {
            ConversionStrategy::Native => &NATIVE,
            ConversionStrategy::SplitWord => &SPLIT_WORD,
        }
    }
}

impl Default for ConversionStrategy {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for ConversionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionStrategy::Native => write!(f, "native"),
            ConversionStrategy::SplitWord => write!(f, "split-word"),
        }
    }
}

/// Converter for the detected strategy.
#[inline]
pub fn default_converter() -> &'static dyn UnsignedConversion {
    ConversionStrategy::detect().converter()
}
