// ============================================================================
// Kernel Module
// Location-based numeric operations and their configuration
// ============================================================================

mod config;
mod numeric_kernel;

pub mod factory;

pub use config::KernelConfig;
pub use factory::{create_from_config, NumericKernelBuilder};
pub use numeric_kernel::NumericKernel;
