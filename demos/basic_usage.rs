// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_kernel::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Numeric Kernel Example ===\n");

    // Build a kernel whose conversion strategy is checked before use
    let kernel = NumericKernelBuilder::new()
        .trace_traps(true)
        .verify_conversion(10_000)
        .build()
        .unwrap();

    println!("Created kernel: {:?}\n", kernel);

    // Operand storage owned by the caller; offsets need not be aligned
    let mut storage = [0u8; 33];
    let mut view = MemoryView::new(&mut storage);

    // Unsigned conversion at the top of the range
    println!("=== Unsigned Conversion ===");
    view.write::<u64>(1, u64::MAX).unwrap();
    kernel.uint64_to_float64(&mut view, 1).unwrap();
    println!("u64::MAX as f64 = {}", view.read::<f64>(1).unwrap());

    let tricky = ((1u64 << 23) + 1) << 32 | 0x7fff_ffff;
    view.write::<u64>(1, tricky).unwrap();
    kernel.uint64_to_float32(&mut view, 1).unwrap();
    println!("{:#x} as f32 = {}", tricky, view.read::<f32>(1).unwrap());

    // Range-checked narrowing
    println!("\n=== Narrowing Conversion ===");
    for input in [-0.5f64, -1.0, 1e19, 9_223_372_036_854_775_808.0, f64::NAN] {
        view.write::<f64>(9, input).unwrap();
        let status = kernel.float64_to_uint64(&mut view, 9).unwrap();
        if status.is_success() {
            println!("{} -> u64 {}", input, view.read::<u64>(9).unwrap());
        } else {
            println!("{} -> u64 trapped ({})", input, status);
        }
    }

    // Checked division
    println!("\n=== Checked Division ===");
    for (dividend, divisor) in [(-7i64, 2i64), (42, 0), (i64::MIN, -1)] {
        view.write::<i64>(17, dividend).unwrap();
        view.write::<i64>(25, divisor).unwrap();
        let status = kernel.int64_div(&mut view, 17, 25).unwrap();
        println!(
            "{} / {} -> code {} ({}), slot = {}",
            dividend,
            divisor,
            i32::from(status),
            status,
            view.read::<i64>(17).unwrap()
        );
    }

    // Bit primitives take the operand and shift count from adjacent slots
    println!("\n=== Bit Primitives ===");
    view.write::<u32>(1, 0x8000_0001).unwrap();
    view.write::<u32>(5, 36).unwrap();
    println!("rol(0x80000001, 36) = {:#x}", kernel.word32_rol(&view, 1).unwrap());
    println!("ctz(0x80000001) = {}", kernel.word32_ctz(&view, 1).unwrap());
    println!("popcnt(0x80000001) = {}", kernel.word32_popcnt(&view, 1).unwrap());

    // Trap delivery as an embedder would wire it
    println!("\n=== Trap Delivery ===");
    kernel.set_trap_callback_for_testing(Arc::new(LoggingTrapHook));
    kernel.set_trap_callback_for_testing(Arc::new(|| println!("trap delivered")));
    {
        let _guard = GuestRegionGuard::enter();
        view.write::<u64>(17, 1).unwrap();
        view.write::<u64>(25, 0).unwrap();
        if !kernel.uint64_mod(&mut view, 17, 25).unwrap().is_success() {
            kernel.call_trap_callback_for_testing();
        }
    }
    kernel.clear_trap_callback_for_testing();
}
