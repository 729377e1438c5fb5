// ============================================================================
// Numeric Kernel Library
// Bit-exact 64-bit integer/float primitives with trap signaling
// ============================================================================

//! # Numeric Kernel
//!
//! Conversion, checked-arithmetic and bit-manipulation primitives with the
//! exact value semantics of a 64-bit integer/floating-point instruction set,
//! for code generators and interpreters whose host cannot perform them
//! directly or would fault instead of reporting.
//!
//! ## Features
//!
//! - **IEEE-754 rounding**: trunc / floor / ceil / nearest-even
//! - **Correct u64 -> float** on every toolchain, with a split-word strategy
//!   and a conformance self-check against an integer-only reference
//! - **Range-checked float -> int** with the exact asymmetric bounds
//! - **Checked division** that separates divide-by-zero from overflow
//! - **Location-based calling convention** over unaligned memory
//! - **Per-thread guest flag** for an external fault handler
//!
//! ## Example
//!
//! ```rust
//! use numeric_kernel::prelude::*;
//!
//! let kernel = NumericKernel::default();
//!
//! // Operands live in caller-owned storage, at any alignment.
//! let mut storage = [0u8; 17];
//! let mut view = MemoryView::new(&mut storage);
//!
//! view.write::<i64>(1, i64::MIN).unwrap();
//! view.write::<i64>(9, -1).unwrap();
//! let status = kernel.int64_div(&mut view, 1, 9).unwrap();
//! assert_eq!(status, TrapStatus::Overflow);
//! assert_eq!(i32::from(status), -1);
//!
//! view.write::<u64>(1, u64::MAX).unwrap();
//! kernel.uint64_to_float64(&mut view, 1).unwrap();
//! assert_eq!(view.read::<f64>(1).unwrap(), 18446744073709551616.0);
//! ```

pub mod kernel;
pub mod memory;
pub mod numeric;
pub mod platform;
pub mod trap;

// Re-exports for convenience
pub mod prelude {
    pub use crate::kernel::{create_from_config, KernelConfig, NumericKernel, NumericKernelBuilder};
    pub use crate::memory::{MemoryError, MemoryResult, MemoryView, Scalar};
    pub use crate::numeric::{NumericError, NumericResult, TrapStatus};
    pub use crate::platform::{ConversionStrategy, UnsignedConversion};
    pub use crate::trap::{GuestRegionGuard, LoggingTrapHook, NoOpTrapHook, TrapHook};
}
