// ============================================================================
// Kernel Factory
// Creates numeric kernels with proper configuration
// ============================================================================

use super::config::KernelConfig;
use super::numeric_kernel::NumericKernel;
use crate::platform::conversion::{verify_conformance, ConversionStrategy};

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeric kernel from configuration
///
/// # Arguments
/// * `config` - Kernel configuration
///
/// # Returns
/// * `Result<NumericKernel, String>` - Configured kernel or error
///
/// # Example
/// ```
/// use numeric_kernel::kernel::{create_from_config, KernelConfig};
///
/// let kernel = create_from_config(&KernelConfig::verified(1_000)).unwrap();
/// println!("Using {}", kernel.strategy());
/// ```
pub fn create_from_config(config: &KernelConfig) -> Result<NumericKernel, String> {
    // Validate configuration first
    config.validate()?;

    let strategy = config.resolved_conversion();

    // Never trust a conversion strategy we were asked to verify
    if config.conformance_samples > 0 {
        if let Err(failure) = verify_conformance(strategy.converter(), config.conformance_samples)
        {
            tracing::warn!(%failure, "conversion strategy failed conformance check");
            return Err(failure.to_string());
        }
    }

    Ok(NumericKernel::with_options(strategy, config.trace_traps))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for constructing numeric kernels
pub struct NumericKernelBuilder {
    config: KernelConfig,
}

impl NumericKernelBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: KernelConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: KernelConfig) -> Self {
        Self { config }
    }

    /// Force a conversion strategy
    pub fn conversion(mut self, strategy: ConversionStrategy) -> Self {
        self.config.conversion = Some(strategy);
        self
    }

    /// Trace every trapping result
    pub fn trace_traps(mut self, enabled: bool) -> Self {
        self.config.trace_traps = enabled;
        self
    }

    /// Verify the conversion strategy on `samples` inputs at build time
    pub fn verify_conversion(mut self, samples: usize) -> Self {
        self.config.conformance_samples = samples;
        self
    }

    /// Build the kernel
    pub fn build(self) -> Result<NumericKernel, String> {
        create_from_config(&self.config)
    }
}

impl Default for NumericKernelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::conversion::MAX_CONFORMANCE_SAMPLES;

    #[test]
    fn test_create_default() {
        let kernel = create_from_config(&KernelConfig::default()).unwrap();
        assert_eq!(kernel.strategy(), ConversionStrategy::detect());
    }

    #[test]
    fn test_create_verified_split_word() {
        let config = KernelConfig::split_word().with_conformance_samples(5_000);
        let kernel = create_from_config(&config).unwrap();
        assert_eq!(kernel.strategy(), ConversionStrategy::SplitWord);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = KernelConfig::verified(MAX_CONFORMANCE_SAMPLES + 1);
        assert!(create_from_config(&config).is_err());
    }

    #[test]
    fn test_builder() {
        let kernel = NumericKernelBuilder::new()
            .conversion(ConversionStrategy::Native)
            .trace_traps(true)
            .verify_conversion(1_000)
            .build()
            .unwrap();

        assert_eq!(kernel.strategy(), ConversionStrategy::Native);
    }

    #[test]
    fn test_builder_from_config() {
        let kernel = NumericKernelBuilder::from_config(KernelConfig::split_word())
            .build()
            .unwrap();
        assert_eq!(kernel.strategy(), ConversionStrategy::SplitWord);
    }
}
