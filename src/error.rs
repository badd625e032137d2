use core::fmt;

/// Failures of [`BigInt`][crate::BigInt] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Malformed decimal input: empty, a lone sign marker, or a non-digit character.
    InvalidFormat,
    /// The operation has no algorithm in this build (division without feature `division`).
    Unsupported,
    /// Division or remainder with a zero divisor.
    DivisionByZero,
    /// Internal invariant breach, e.g. a borrow that finds nothing to borrow from.
    PreconditionViolation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormat => write!(f, "invalid format: expected optional '-' followed by decimal digits"),
            Error::Unsupported => write!(f, "unsupported operation"),
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::PreconditionViolation => write!(f, "precondition violation in word arithmetic"),
        }
    }
}

impl core::error::Error for Error {}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
