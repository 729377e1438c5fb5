// ============================================================================
// Guest Flag
// Thread-local marker consumed by the external fault handler
// ============================================================================

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static THREAD_IN_GUEST: Cell<bool> = const { Cell::new(false) };
}

/// Mark the current thread as running code the fault handler may intercept.
///
/// Idempotent. Each thread has its own flag.
#[inline]
pub fn set_thread_in_guest() {
    THREAD_IN_GUEST.with(|flag| flag.set(true));
}

/// Clear the current thread's guest flag.
///
/// Must happen before control returns to code that is not trap-aware.
#[inline]
pub fn clear_thread_in_guest() {
    THREAD_IN_GUEST.with(|flag| flag.set(false));
}

/// Whether the current thread's guest flag is set.
#[inline]
pub fn is_thread_in_guest() -> bool {
    THREAD_IN_GUEST.with(Cell::get)
}

/// Sets the guest flag for a lexical region and clears it on drop.
///
/// Not `Send`: the flag belongs to the thread that entered the region.
///
/// # Example
/// ```
/// use numeric_kernel::trap::{is_thread_in_guest, GuestRegionGuard};
///
/// {
///     let _guard = GuestRegionGuard::enter();
///     assert!(is_thread_in_guest());
/// }
/// assert!(!is_thread_in_guest());
/// ```
#[derive(Debug)]
#[must_use = "the guest flag is cleared as soon as the guard is dropped"]
pub struct GuestRegionGuard {
    _not_send: PhantomData<*const ()>,
}

impl GuestRegionGuard {
    /// Set the flag and return the guard that clears it.
    #[inline]
    pub fn enter() -> Self {
        set_thread_in_guest();
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for GuestRegionGuard {
    #[inline]
    fn drop(&mut self) {
        clear_thread_in_guest();
    }
}
