// ============================================================================
// Trap Hooks
// Injectable callback that makes trap delivery observable in tests
// ============================================================================

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Receives a notification each time a trap would be delivered.
///
/// Any `Fn() + Send + Sync` closure is a hook.
pub trait TrapHook: Send + Sync {
    /// Called once per delivered trap.
    fn on_trap(&self);
}

impl<F> TrapHook for F
where
    F: Fn() + Send + Sync,
{
    fn on_trap(&self) {
        self()
    }
}

/// No-op hook for testing
pub struct NoOpTrapHook;

impl TrapHook for NoOpTrapHook {
    fn on_trap(&self) {
        // Do nothing
    }
}

/// Logging hook
pub struct LoggingTrapHook;

impl TrapHook for LoggingTrapHook {
    fn on_trap(&self) {
        tracing::debug!("numeric trap delivered");
    }
}

/// Holds at most one trap hook.
///
/// Owned by a kernel rather than living in a global, so every test builds
/// its own and nothing leaks between them. Calling with no hook registered
/// does nothing.
#[derive(Default)]
pub struct TrapCallbackRegistry {
    hook: Mutex<Option<Arc<dyn TrapHook>>>,
}

impl TrapCallbackRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook`, replacing any previous one.
    pub fn set_callback(&self, hook: Arc<dyn TrapHook>) {
        let replaced = self.hook.lock().replace(hook).is_some();
        tracing::debug!(replaced, "trap callback registered");
    }

    /// Remove the registered hook, if any.
    pub fn clear_callback(&self) {
        if self.hook.lock().take().is_some() {
            tracing::debug!("trap callback cleared");
        }
    }

    /// Whether a hook is registered.
    pub fn has_callback(&self) -> bool {
        self.hook.lock().is_some()
    }

    /// Invoke the registered hook; no-op when empty.
    ///
    /// The lock is released before the hook runs, so a hook may itself
    /// register or clear callbacks.
    pub fn call(&self) {
        let hook = self.hook.lock().clone();
        if let Some(hook) = hook {
            hook.on_trap();
        }
    }
}

impl fmt::Debug for TrapCallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrapCallbackRegistry")
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_call_without_callback_is_noop() {
        let registry = TrapCallbackRegistry::new();
        assert!(!registry.has_callback());
        registry.call();
    }

    #[test]
    fn test_closure_hook_invoked() {
        let registry = TrapCallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        registry.set_callback(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        registry.call();
        registry.call();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clear_callback() {
        let registry = TrapCallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        registry.set_callback(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        registry.clear_callback();
        registry.call();

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!registry.has_callback());
    }

    #[test]
    fn test_hook_may_clear_itself() {
        let registry = Arc::new(TrapCallbackRegistry::new());
        let inner = Arc::clone(&registry);

        registry.set_callback(Arc::new(move || inner.clear_callback()));
        registry.call();

        assert!(!registry.has_callback());
    }

    #[test]
    fn test_builtin_hooks() {
        NoOpTrapHook.on_trap();
        LoggingTrapHook.on_trap();
    }
}
