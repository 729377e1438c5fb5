// ============================================================================
// Memory Module
// Typed, alignment-free access to caller-supplied operand storage
// ============================================================================
//
// Every kernel operation receives its operands by location. A location is
// an offset into a `MemoryView`; the view checks bounds and copies bytes, so
// no access ever depends on the natural alignment of the operand type.

mod errors;
mod view;

pub use errors::{MemoryError, MemoryResult};
pub use view::{MemoryView, Scalar};
