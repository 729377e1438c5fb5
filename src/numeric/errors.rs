// ============================================================================
// Numeric Errors
// Trap conditions raised by checked conversions and division
// ============================================================================

use std::fmt;

/// Conditions under which a numeric operation refuses to produce a value.
///
/// None of these abort: the caller turns them into whatever trap its
/// instruction semantics demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Divisor was zero
    DivisionByZero,
    /// Signed quotient does not fit (i64::MIN / -1)
    IntegerOverflow,
    /// Float is NaN, infinite or outside the target integer range
    Unrepresentable,
}

impl NumericError {
    /// Status code reported through the location-based calling convention.
    #[inline]
    pub const fn status(self) -> TrapStatus {
        match self {
            NumericError::DivisionByZero | NumericError::Unrepresentable => TrapStatus::Failure,
            NumericError::IntegerOverflow => TrapStatus::Overflow,
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "integer division by zero"),
            NumericError::IntegerOverflow => {
                write!(f, "integer overflow: quotient not representable")
            },
            NumericError::Unrepresentable => write!(
                f,
                "float unrepresentable in integer range: NaN, infinite or out of bounds"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

/// Integer status returned by fallible location-based operations.
///
/// `Failure` means nothing was written; `Overflow` is kept apart from
/// `Failure` so callers can raise a different trap for `i64::MIN / -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TrapStatus {
    /// Signed division overflow, no write
    Overflow = -1,
    /// Division by zero or out-of-range conversion, no write
    Failure = 0,
    /// Result written in place
    Success = 1,
}

impl TrapStatus {
    /// Raw integer code.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Whether the operation wrote its result.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, TrapStatus::Success)
    }

    /// Collapse a numeric result into its status code.
    #[inline]
    pub fn of<T>(result: &NumericResult<T>) -> Self {
        match result {
            Ok(_) => TrapStatus::Success,
            Err(err) => err.status(),
        }
    }
}

impl From<TrapStatus> for i32 {
    #[inline]
    fn from(status: TrapStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for TrapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrapStatus::Overflow => write!(f, "overflow ({})", self.code()),
            TrapStatus::Failure => write!(f, "failure ({})", self.code()),
            TrapStatus::Success => write!(f, "success ({})", self.code()),
        }
    }
}
