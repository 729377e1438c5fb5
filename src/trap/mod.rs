// ============================================================================
// Trap Module
// Bridge to the out-of-band fault handler and its test seam
// ============================================================================
//
// - Guest flag: per-thread "executing trap-aware code" marker read by the
//   fault handler when it intercepts a hardware fault
// - Trap hooks: an injectable callback that makes trap delivery observable
//   in tests

mod flag;
mod hook;

pub use flag::{clear_thread_in_guest, is_thread_in_guest, set_thread_in_guest, GuestRegionGuard};
pub use hook::{LoggingTrapHook, NoOpTrapHook, TrapCallbackRegistry, TrapHook};
