// ============================================================================
// Numeric Kernel
// In-place, location-based surface called by generated code
// ============================================================================

use crate::memory::{MemoryResult, MemoryView, Scalar};
use crate::numeric::{self, NumericResult, TrapStatus};
use crate::platform::conversion::{ConversionStrategy, UnsignedConversion};
use crate::trap::{self, TrapCallbackRegistry, TrapHook};
use std::fmt;
use std::sync::Arc;

/// Numeric kernel with a fixed unsigned conversion strategy.
///
/// Every operation takes its operands by location: a `MemoryView` plus byte
/// offsets. Results are written back in place, over the (first) operand.
/// Fallible operations return a `TrapStatus`; on anything but `Success` the
/// destination is left untouched. Conversions reuse one slot for input and
/// output, so that slot must be wide enough for both types.
///
/// `MemoryError` is reserved for offsets that do not fit the view, i.e. a
/// broken caller contract. Numeric traps never surface as `Err`.
pub struct NumericKernel {
    /// Strategy behind `converter`
    strategy: ConversionStrategy,

    /// Shared u64 -> float converter
    converter: &'static dyn UnsignedConversion,

    /// Trace every trapping result
    trace_traps: bool,

    /// Test seam for trap delivery
    trap_hooks: TrapCallbackRegistry,
}

impl NumericKernel {
    /// Create a kernel using `strategy` for unsigned conversions.
    pub fn new(strategy: ConversionStrategy) -> Self {
        Self::with_options(strategy, false)
    }

    pub(crate) fn with_options(strategy: ConversionStrategy, trace_traps: bool) -> Self {
        let converter = strategy.converter();
        tracing::debug!(
            strategy = %strategy,
            converter = converter.name(),
            trace_traps,
            "numeric kernel created"
        );

        Self {
            strategy,
            converter,
            trace_traps,
            trap_hooks: TrapCallbackRegistry::new(),
        }
    }

    /// Strategy used for unsigned conversions.
    pub fn strategy(&self) -> ConversionStrategy {
        self.strategy
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    #[inline]
    fn map_in_place<T: Scalar, U: Scalar>(
        view: &mut MemoryView<'_>,
        offset: usize,
        op: impl FnOnce(T) -> U,
    ) -> MemoryResult<()> {
        let input = view.read::<T>(offset)?;
        view.write(offset, op(input))
    }

    #[inline]
    fn try_map_in_place<T: Scalar, U: Scalar>(
        &self,
        name: &'static str,
        view: &mut MemoryView<'_>,
        offset: usize,
        op: impl FnOnce(T) -> NumericResult<U>,
    ) -> MemoryResult<TrapStatus> {
        let input = view.read::<T>(offset)?;
        self.commit(name, view, offset, op(input))
    }

    #[inline]
    fn try_binary_in_place<T: Scalar>(
        &self,
        name: &'static str,
        view: &mut MemoryView<'_>,
        dst: usize,
        src: usize,
        op: impl FnOnce(T, T) -> NumericResult<T>,
    ) -> MemoryResult<TrapStatus> {
        let divisor = view.read::<T>(src)?;
        let dividend = view.read::<T>(dst)?;
        self.commit(name, view, dst, op(dividend, divisor))
    }

    #[inline]
    fn commit<U: Scalar>(
        &self,
        name: &'static str,
        view: &mut MemoryView<'_>,
        offset: usize,
        result: NumericResult<U>,
    ) -> MemoryResult<TrapStatus> {
        match result {
            Ok(value) => {
                view.write(offset, value)?;
                Ok(TrapStatus::Success)
            },
            Err(err) => {
                if self.trace_traps {
                    tracing::trace!(op = name, offset, error = %err, "numeric trap");
                }
                Ok(err.status())
            },
        }
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Truncate the f32 at `offset` in place.
    pub fn f32_trunc(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f32_trunc)
    }

    /// Floor the f32 at `offset` in place.
    pub fn f32_floor(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f32_floor)
    }

    /// Ceil the f32 at `offset` in place.
    pub fn f32_ceil(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f32_ceil)
    }

    /// Round the f32 at `offset` to nearest-even in place.
    pub fn f32_nearest_int(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f32_nearest)
    }

    /// Truncate the f64 at `offset` in place.
    pub fn f64_trunc(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f64_trunc)
    }

    /// Floor the f64 at `offset` in place.
    pub fn f64_floor(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f64_floor)
    }

    /// Ceil the f64 at `offset` in place.
    pub fn f64_ceil(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f64_ceil)
    }

    /// Round the f64 at `offset` to nearest-even in place.
    pub fn f64_nearest_int(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f64_nearest)
    }

    // ========================================================================
    // Widening conversions
    // ========================================================================

    /// Replace the i64 at `offset` with the nearest f32.
    pub fn int64_to_float32(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::i64_to_f32)
    }

    /// Replace the u64 at `offset` with the nearest f32.
    pub fn uint64_to_float32(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        let converter = self.converter;
        Self::map_in_place(view, offset, |value: u64| converter.u64_to_f32(value))
    }

    /// Replace the i64 at `offset` with the nearest f64.
    pub fn int64_to_float64(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::i64_to_f64)
    }

    /// Replace the u64 at `offset` with the nearest f64.
    pub fn uint64_to_float64(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        let converter = self.converter;
        Self::map_in_place(view, offset, |value: u64| converter.u64_to_f64(value))
    }

    // ========================================================================
    // Narrowing conversions
    // ========================================================================

    /// Truncate the f32 at `offset` into an i64 in place.
    pub fn float32_to_int64(
        &self,
        view: &mut MemoryView<'_>,
        offset: usize,
    ) -> MemoryResult<TrapStatus> {
        self.try_map_in_place("float32_to_int64", view, offset, numeric::f32_to_i64)
    }

    /// Truncate the f32 at `offset` into a u64 in place.
    pub fn float32_to_uint64(
        &self,
        view: &mut MemoryView<'_>,
        offset: usize,
    ) -> MemoryResult<TrapStatus> {
        self.try_map_in_place("float32_to_uint64", view, offset, numeric::f32_to_u64)
    }

    /// Truncate the f64 at `offset` into an i64 in place.
    pub fn float64_to_int64(
        &self,
        view: &mut MemoryView<'_>,
        offset: usize,
    ) -> MemoryResult<TrapStatus> {
        self.try_map_in_place("float64_to_int64", view, offset, numeric::f64_to_i64)
    }

    /// Truncate the f64 at `offset` into a u64 in place.
    pub fn float64_to_uint64(
        &self,
        view: &mut MemoryView<'_>,
        offset: usize,
    ) -> MemoryResult<TrapStatus> {
        self.try_map_in_place("float64_to_uint64", view, offset, numeric::f64_to_u64)
    }

    /// Saturating f32 -> i64 in place; always writes.
    pub fn float32_to_int64_sat(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f32_to_i64_sat)
    }

    /// Saturating f32 -> u64 in place; always writes.
    pub fn float32_to_uint64_sat(
        &self,
        view: &mut MemoryView<'_>,
        offset: usize,
    ) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f32_to_u64_sat)
    }

    /// Saturating f64 -> i64 in place; always writes.
    pub fn float64_to_int64_sat(&self, view: &mut MemoryView<'_>, offset: usize) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f64_to_i64_sat)
    }

    /// Saturating f64 -> u64 in place; always writes.
    pub fn float64_to_uint64_sat(
        &self,
        view: &mut MemoryView<'_>,
        offset: usize,
    ) -> MemoryResult<()> {
        Self::map_in_place(view, offset, numeric::f64_to_u64_sat)
    }

    // ========================================================================
    // Checked division
    // ========================================================================

    /// `dst = dst / src` on i64.
    ///
    /// `Failure` on a zero divisor, `Overflow` for `i64::MIN / -1`.
    pub fn int64_div(
        &self,
        view: &mut MemoryView<'_>,
        dst: usize,
        src: usize,
    ) -> MemoryResult<TrapStatus> {
        self.try_binary_in_place("int64_div", view, dst, src, numeric::i64_div)
    }

    /// `dst = dst % src` on i64.
    pub fn int64_mod(
        &self,
        view: &mut MemoryView<'_>,
        dst: usize,
        src: usize,
    ) -> MemoryResult<TrapStatus> {
        self.try_binary_in_place("int64_mod", view, dst, src, numeric::i64_rem)
    }

    /// `dst = dst / src` on u64.
    pub fn uint64_div(
        &self,
        view: &mut MemoryView<'_>,
        dst: usize,
        src: usize,
    ) -> MemoryResult<TrapStatus> {
        self.try_binary_in_place("uint64_div", view, dst, src, numeric::u64_div)
    }

    /// `dst = dst % src` on u64.
    pub fn uint64_mod(
        &self,
        view: &mut MemoryView<'_>,
        dst: usize,
        src: usize,
    ) -> MemoryResult<TrapStatus> {
        self.try_binary_in_place("uint64_mod", view, dst, src, numeric::u64_rem)
    }

    // ========================================================================
    // Bit primitives
    // ========================================================================

    /// Trailing zeros of the u32 at `offset`.
    pub fn word32_ctz(&self, view: &MemoryView<'_>, offset: usize) -> MemoryResult<u32> {
        view.read::<u32>(offset).map(numeric::word32_ctz)
    }

    /// Trailing zeros of the u64 at `offset`.
    pub fn word64_ctz(&self, view: &MemoryView<'_>, offset: usize) -> MemoryResult<u32> {
        view.read::<u64>(offset).map(numeric::word64_ctz)
    }

    /// Set bits in the u32 at `offset`.
    pub fn word32_popcnt(&self, view: &MemoryView<'_>, offset: usize) -> MemoryResult<u32> {
        view.read::<u32>(offset).map(numeric::word32_popcnt)
    }

    /// Set bits in the u64 at `offset`.
    pub fn word64_popcnt(&self, view: &MemoryView<'_>, offset: usize) -> MemoryResult<u32> {
        view.read::<u64>(offset).map(numeric::word64_popcnt)
    }

    /// Rotate the u32 at `offset` left by the u32 right after it.
    pub fn word32_rol(&self, view: &MemoryView<'_>, offset: usize) -> MemoryResult<u32> {
        let (value, shift) = Self::value_and_shift::<u32>(view, offset)?;
        Ok(numeric::word32_rol(value, shift))
    }

    /// Rotate the u32 at `offset` right by the u32 right after it.
    pub fn word32_ror(&self, view: &MemoryView<'_>, offset: usize) -> MemoryResult<u32> {
        let (value, shift) = Self::value_and_shift::<u32>(view, offset)?;
        Ok(numeric::word32_ror(value, shift))
    }

    /// Rotate the u64 at `offset` left by the u64 right after it.
    pub fn word64_rol(&self, view: &MemoryView<'_>, offset: usize) -> MemoryResult<u64> {
        let (value, shift) = Self::value_and_shift::<u64>(view, offset)?;
        Ok(numeric::word64_rol(value, shift))
    }

    /// Rotate the u64 at `offset` right by the u64 right after it.
    pub fn word64_ror(&self, view: &MemoryView<'_>, offset: usize) -> MemoryResult<u64> {
        let (value, shift) = Self::value_and_shift::<u64>(view, offset)?;
        Ok(numeric::word64_ror(value, shift))
    }

    fn value_and_shift<T: Scalar>(view: &MemoryView<'_>, offset: usize) -> MemoryResult<(T, T)> {
        let value = view.read::<T>(offset)?;
        let shift = view.read::<T>(offset.saturating_add(T::WIDTH))?;
        Ok((value, shift))
    }

    // ========================================================================
    // Power
    // ========================================================================

    /// `dst = dst ** src` on f64.
    pub fn float64_pow(
        &self,
        view: &mut MemoryView<'_>,
        dst: usize,
        src: usize,
    ) -> MemoryResult<()> {
        let exponent = view.read::<f64>(src)?;
        let base = view.read::<f64>(dst)?;
        view.write(dst, numeric::f64_pow(base, exponent))
    }

    // ========================================================================
    // Trap bridge
    // ========================================================================

    /// Set the calling thread's guest flag.
    pub fn set_thread_in_guest_flag(&self) {
        trap::set_thread_in_guest();
    }

    /// Clear the calling thread's guest flag.
    pub fn clear_thread_in_guest_flag(&self) {
        trap::clear_thread_in_guest();
    }

    /// Register the hook run by `call_trap_callback_for_testing`.
    pub fn set_trap_callback_for_testing(&self, hook: Arc<dyn TrapHook>) {
        self.trap_hooks.set_callback(hook);
    }

    /// Drop the registered test hook.
    pub fn clear_trap_callback_for_testing(&self) {
        self.trap_hooks.clear_callback();
    }

    /// Run the registered test hook, if any.
    pub fn call_trap_callback_for_testing(&self) {
        self.trap_hooks.call();
    }
}

impl Default for NumericKernel {
    fn default() -> Self {
        Self::new(ConversionStrategy::detect())
    }
}

impl fmt::Debug for NumericKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericKernel")
            .field("strategy", &self.strategy)
            .field("converter", &self.converter.name())
            .field("trace_traps", &self.trace_traps)
            .field("trap_hooks", &self.trap_hooks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn kernels() -> [NumericKernel; 2] {
        [
            NumericKernel::new(ConversionStrategy::Native),
            NumericKernel::new(ConversionStrategy::SplitWord),
        ]
    }

    #[test]
    fn test_rounding_in_place_unaligned() {
        let kernel = NumericKernel::default();
        let mut storage = [0u8; 16];
        let mut view = MemoryView::new(&mut storage);

        view.write::<f32>(1, -2.5).unwrap();
        kernel.f32_nearest_int(&mut view, 1).unwrap();
        assert_eq!(view.read::<f32>(1).unwrap(), -2.0);

        view.write::<f64>(3, 2.7).unwrap();
        kernel.f64_floor(&mut view, 3).unwrap();
        assert_eq!(view.read::<f64>(3).unwrap(), 2.0);

        view.write::<f64>(3, -0.3).unwrap();
        kernel.f64_ceil(&mut view, 3).unwrap();
        assert_eq!(view.read::<f64>(3).unwrap().to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_uint64_to_float_all_strategies() {
        for kernel in kernels() {
            let mut storage = [0u8; 9];
            let mut view = MemoryView::new(&mut storage);

            view.write::<u64>(1, u64::MAX).unwrap();
            kernel.uint64_to_float64(&mut view, 1).unwrap();
            assert_eq!(view.read::<f64>(1).unwrap(), 18_446_744_073_709_551_616.0);

            let tricky = ((1u64 << 23) + 1) << 32 | 0x7fff_ffff;
            view.write::<u64>(1, tricky).unwrap();
            kernel.uint64_to_float32(&mut view, 1).unwrap();
            assert_eq!(view.read::<f32>(1).unwrap(), tricky as f32);
        }
    }

    #[test]
    fn test_int64_to_float() {
        let kernel = NumericKernel::default();
        let mut storage = [0u8; 8];
        let mut view = MemoryView::new(&mut storage);

        view.write::<i64>(0, -3).unwrap();
        kernel.int64_to_float64(&mut view, 0).unwrap();
        assert_eq!(view.read::<f64>(0).unwrap(), -3.0);

        view.write::<i64>(0, i64::MIN).unwrap();
        kernel.int64_to_float32(&mut view, 0).unwrap();
        assert_eq!(view.read::<f32>(0).unwrap(), -9_223_372_036_854_775_808.0);
    }

    #[test]
    fn test_narrowing_failure_leaves_slot_untouched() {
        let kernel = NumericKernel::default();
        let mut storage = [0u8; 8];
        let mut view = MemoryView::new(&mut storage);

        view.write::<f64>(0, 9_223_372_036_854_775_808.0).unwrap();
        let status = kernel.float64_to_int64(&mut view, 0).unwrap();
        assert_eq!(status, TrapStatus::Failure);
        assert_eq!(view.read::<f64>(0).unwrap(), 9_223_372_036_854_775_808.0);
    }

    #[test]
    fn test_narrowing_success() {
        let kernel = NumericKernel::default();
        let mut storage = [0u8; 10];
        let mut view = MemoryView::new(&mut storage);

        view.write::<f32>(2, -7.9).unwrap();
        assert_eq!(kernel.float32_to_int64(&mut view, 2).unwrap(), TrapStatus::Success);
        assert_eq!(view.read::<i64>(2).unwrap(), -7);

        view.write::<f64>(2, 1e19).unwrap();
        assert_eq!(kernel.float64_to_uint64(&mut view, 2).unwrap(), TrapStatus::Success);
        assert_eq!(view.read::<u64>(2).unwrap(), 10_000_000_000_000_000_000);
    }

    #[test]
    fn test_saturating_always_writes() {
        let kernel = NumericKernel::default();
        let mut storage = [0u8; 8];
        let mut view = MemoryView::new(&mut storage);

        view.write::<f64>(0, f64::NAN).unwrap();
        kernel.float64_to_int64_sat(&mut view, 0).unwrap();
        assert_eq!(view.read::<i64>(0).unwrap(), 0);

        view.write::<f32>(0, -1e30).unwrap();
        kernel.float32_to_uint64_sat(&mut view, 0).unwrap();
        assert_eq!(view.read::<u64>(0).unwrap(), 0);
    }

    #[test]
    fn test_division_statuses() {
        let kernel = NumericKernel::default().with_trace();
        let mut storage = [0u8; 16];
        let mut view = MemoryView::new(&mut storage);

        view.write::<i64>(0, i64::MIN).unwrap();
        view.write::<i64>(8, -1).unwrap();
        assert_eq!(kernel.int64_div(&mut view, 0, 8).unwrap(), TrapStatus::Overflow);
        assert_eq!(view.read::<i64>(0).unwrap(), i64::MIN);

        assert_eq!(kernel.int64_mod(&mut view, 0, 8).unwrap(), TrapStatus::Success);
        assert_eq!(view.read::<i64>(0).unwrap(), 0);

        view.write::<u64>(0, 17).unwrap();
        view.write::<u64>(8, 0).unwrap();
        assert_eq!(kernel.uint64_div(&mut view, 0, 8).unwrap(), TrapStatus::Failure);
        assert_eq!(kernel.uint64_mod(&mut view, 0, 8).unwrap(), TrapStatus::Failure);
        assert_eq!(view.read::<u64>(0).unwrap(), 17);

        view.write::<u64>(8, 5).unwrap();
        assert_eq!(kernel.uint64_mod(&mut view, 0, 8).unwrap(), TrapStatus::Success);
        assert_eq!(view.read::<u64>(0).unwrap(), 2);
    }

    #[test]
    fn test_bit_primitives_from_memory() {
        let kernel = NumericKernel::default();
        let mut storage = [0u8; 17];
        let mut view = MemoryView::new(&mut storage);

        view.write::<u32>(1, 0x8000_0001).unwrap();
        view.write::<u32>(5, 33).unwrap();
        assert_eq!(kernel.word32_rol(&view, 1).unwrap(), 0x0000_0003);
        assert_eq!(kernel.word32_ror(&view, 1).unwrap(), 0xc000_0000);
        assert_eq!(kernel.word32_ctz(&view, 1).unwrap(), 0);
        assert_eq!(kernel.word32_popcnt(&view, 1).unwrap(), 2);

        view.write::<u64>(1, 0).unwrap();
        view.write::<u64>(9, 4).unwrap();
        assert_eq!(kernel.word64_ctz(&view, 1).unwrap(), 64);
        assert_eq!(kernel.word64_popcnt(&view, 1).unwrap(), 0);
        assert_eq!(kernel.word64_rol(&view, 1).unwrap(), 0);

        view.write::<u64>(1, 1).unwrap();
        assert_eq!(kernel.word64_ror(&view, 1).unwrap(), 1 << 60);
    }

    #[test]
    fn test_pow_in_place() {
        let kernel = NumericKernel::default();
        let mut storage = [0u8; 16];
        let mut view = MemoryView::new(&mut storage);

        view.write::<f64>(0, 2.0).unwrap();
        view.write::<f64>(8, 10.0).unwrap();
        kernel.float64_pow(&mut view, 0, 8).unwrap();
        assert_eq!(view.read::<f64>(0).unwrap(), 1024.0);
        assert_eq!(view.read::<f64>(8).unwrap(), 10.0);
    }

    #[test]
    fn test_out_of_bounds_is_memory_error() {
        let kernel = NumericKernel::default();
        let mut storage = [0u8; 12];
        let mut view = MemoryView::new(&mut storage);

        assert!(matches!(
            kernel.int64_div(&mut view, 0, 8),
            Err(MemoryError::OutOfBounds { offset: 8, .. })
        ));
        assert!(kernel.word32_rol(&view, 10).is_err());
        assert!(kernel.f64_trunc(&mut view, 5).is_err());
    }

    #[test]
    fn test_guest_flag_bridge() {
        let kernel = NumericKernel::default();
        kernel.set_thread_in_guest_flag();
        assert!(trap::is_thread_in_guest());
        kernel.clear_thread_in_guest_flag();
        assert!(!trap::is_thread_in_guest());
    }

    #[test]
    fn test_trap_callback_for_testing() {
        let kernel = NumericKernel::default();
        kernel.call_trap_callback_for_testing();

        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        kernel.set_trap_callback_for_testing(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        kernel.call_trap_callback_for_testing();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        kernel.clear_trap_callback_for_testing();
        kernel.call_trap_callback_for_testing();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    impl NumericKernel {
        fn with_trace(self) -> Self {
            Self::with_options(self.strategy, true)
        }
    }
}
