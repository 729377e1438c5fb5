// ============================================================================
// Kernel Configuration
// Strategy selection, trap tracing and conformance checking
// ============================================================================

use crate::platform::conversion::{ConversionStrategy, MAX_CONFORMANCE_SAMPLES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for building a `NumericKernel`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KernelConfig {
    /// Unsigned conversion strategy
    /// None means detect from the toolchain
    pub conversion: Option<ConversionStrategy>,

    /// Emit a `trace` event for every trapping result
    pub trace_traps: bool,

    /// Pseudo-random inputs to check the conversion strategy against the
    /// reference rounding before the kernel is built (boundary inputs are
    /// always checked when this is non-zero)
    /// 0 disables the check
    pub conformance_samples: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            conversion: None,
            trace_traps: false,
            conformance_samples: 0,
        }
    }
}

impl KernelConfig {
    /// Create a configuration with detected strategy and no extras
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Force a conversion strategy
    pub fn with_conversion(mut self, strategy: ConversionStrategy) -> Self {
        self.conversion = Some(strategy);
        self
    }

    /// Builder method: Enable or disable trap tracing
    pub fn with_trace_traps(mut self, enabled: bool) -> Self {
        self.trace_traps = enabled;
        self
    }

    /// Builder method: Set the number of conformance samples
    pub fn with_conformance_samples(mut self, samples: usize) -> Self {
        self.conformance_samples = samples;
        self
    }

    /// Strategy the kernel will use
    pub fn resolved_conversion(&self) -> ConversionStrategy {
        self.conversion.unwrap_or_else(ConversionStrategy::detect)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.conformance_samples > MAX_CONFORMANCE_SAMPLES {
            return Err(format!(
                "Conformance samples cannot exceed {}",
                MAX_CONFORMANCE_SAMPLES
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl KernelConfig {
    /// Always use the native cast
    pub fn native() -> Self {
        Self::new().with_conversion(ConversionStrategy::Native)
    }

    /// Always use the split-word conversion
    pub fn split_word() -> Self {
        Self::new().with_conversion(ConversionStrategy::SplitWord)
    }

    /// Detected strategy, verified on `samples` inputs before use
    pub fn verified(samples: usize) -> Self {
        Self::new().with_conformance_samples(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = KernelConfig::new();
        assert_eq!(config.conversion, None);
        assert!(!config.trace_traps);
        assert_eq!(config.conformance_samples, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = KernelConfig::split_word()
            .with_trace_traps(true)
            .with_conformance_samples(100);

        assert_eq!(config.conversion, Some(ConversionStrategy::SplitWord));
        assert!(config.trace_traps);
        assert_eq!(config.conformance_samples, 100);
    }

    #[test]
    fn test_validation() {
        let config = KernelConfig::verified(MAX_CONFORMANCE_SAMPLES + 1);
        assert!(config.validate().is_err());

        let config = KernelConfig::verified(MAX_CONFORMANCE_SAMPLES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolved_conversion() {
        assert_eq!(
            KernelConfig::native().resolved_conversion(),
            ConversionStrategy::Native
        );
        assert_eq!(
            KernelConfig::new().resolved_conversion(),
            ConversionStrategy::detect()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = KernelConfig::split_word().with_trace_traps(true);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"split-word\""));

        let parsed: KernelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let partial: KernelConfig = serde_json::from_str(r#"{"trace_traps":true}"#).unwrap();
        assert_eq!(partial.conversion, None);
        assert!(partial.trace_traps);
    }
}
