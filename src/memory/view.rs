// ============================================================================
// Memory View
// Bounds-checked, unaligned reads and writes of scalar operands
// ============================================================================

use super::errors::{MemoryError, MemoryResult};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width scalar that can live in operand storage.
///
/// Values are stored in native byte order, exactly as the code generator
/// placed them. Reading and writing go through byte copies, so a float's bit
/// pattern (NaN payload included) survives a round trip unchanged.
pub trait Scalar: Copy + sealed::Sealed {
    /// Storage width in bytes.
    const WIDTH: usize;

    /// Decode from exactly `WIDTH` bytes.
    fn read_from(bytes: &[u8]) -> Self;

    /// Encode into exactly `WIDTH` bytes.
    fn write_to(self, bytes: &mut [u8]);
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn read_from(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(buf)
                }

                #[inline]
                fn write_to(self, bytes: &mut [u8]) {
                    bytes.copy_from_slice(&self.to_ne_bytes());
                }
            }
        )*
    };
}

impl_scalar!(i32, u32, i64, u64, f32, f64);

/// Mutable view over the storage a caller hands to the kernel.
///
/// The view abstracts over alignment and bounds: operands are addressed by
/// byte offset and may sit at any offset that leaves room for their width.
///
/// # Example
/// ```
/// use numeric_kernel::memory::MemoryView;
///
/// let mut storage = [0u8; 9];
/// let mut view = MemoryView::new(&mut storage);
/// view.write::<u64>(1, 42).unwrap(); // deliberately misaligned
/// assert_eq!(view.read::<u64>(1).unwrap(), 42);
/// ```
#[derive(Debug)]
pub struct MemoryView<'a> {
    bytes: &'a mut [u8],
}

impl<'a> MemoryView<'a> {
    /// Wrap a byte slice.
    #[inline]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    /// Build a view from a raw address handed over by generated code.
    ///
    /// # Safety
    /// `ptr` must be valid for reads and writes of `len` bytes for the whole
    /// lifetime `'a`, and no other reference may alias that range meanwhile.
    /// No alignment is required.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize) -> Self {
        Self {
            bytes: std::slice::from_raw_parts_mut(ptr, len),
        }
    }

    /// Size of the view in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view has no bytes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read a `T` stored at `offset`.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if the operand does not fit in the view.
    #[inline]
    pub fn read<T: Scalar>(&self, offset: usize) -> MemoryResult<T> {
        let range = self.slot(offset, T::WIDTH)?;
        Ok(T::read_from(&self.bytes[range]))
    }

    /// Write `value` at `offset`.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if the operand does not fit; nothing is written.
    #[inline]
    pub fn write<T: Scalar>(&mut self, offset: usize, value: T) -> MemoryResult<()> {
        let range = self.slot(offset, T::WIDTH)?;
        value.write_to(&mut self.bytes[range]);
        Ok(())
    }

    fn slot(&self, offset: usize, width: usize) -> MemoryResult<std::ops::Range<usize>> {
        let len = self.bytes.len();
        match offset.checked_add(width) {
            Some(end) if end <= len => Ok(offset..end),
            _ => Err(MemoryError::OutOfBounds { offset, width, len }),
        }
    }
}

impl<'a> From<&'a mut [u8]> for MemoryView<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        Self::new(bytes)
    }
}
