// ============================================================================
// Memory Errors
// Caller-contract violations detected by the memory view
// ============================================================================

use std::fmt;

/// Errors raised when an operand location does not fit the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryError {
    /// `offset + width` runs past the end of the view (or overflows)
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::OutOfBounds { offset, width, len } => write!(
                f,
                "out of bounds: {} byte operand at offset {} exceeds view of {} bytes",
                width, offset, len
            ),
        }
    }
}

impl std::error::Error for MemoryError {}

/// Result type alias for memory view accesses
pub type MemoryResult<T> = Result<T, MemoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MemoryError::OutOfBounds {
            offset: 6,
            width: 8,
            len: 10,
        };
        assert_eq!(
            err.to_string(),
            "out of bounds: 8 byte operand at offset 6 exceeds view of 10 bytes"
        );
    }
}
