//! Error types for vector indexing and mapping expansion.

use std::fmt;

/// The error type shared by the fallible vector and mapping operations.
///
/// Every error aborts the current operation entirely: this layer has no
/// transient failures to retry and no partial results.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// An index or slice bound fell outside the vector's logical window,
    /// or a raw storage write fell outside storage.
    OutOfRange { index: i64 },
    /// A slice normalized to zero width.
    ZeroSizedSlice,
    /// A numeric conversion found an element that is still symbolic rather
    /// than a concrete 0/1 bit.
    NotConstant { position: usize },
    /// A vector binding whose value length disagrees with its key length.
    LengthMismatch { key_len: usize, val_len: usize },
    /// A vector-binding key element that is neither a concrete bit nor a
    /// bare variable, so it cannot be expanded into a scalar binding.
    NotAVariable { position: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index } => {
                write!(f, "index {} out of range", index)
            }
            Error::ZeroSizedSlice => {
                write!(f, "zero-sized slice")
            }
            Error::NotConstant { position } => {
                write!(f, "cannot convert: element at position {} is not a constant", position)
            }
            Error::LengthMismatch { key_len, val_len } => {
                write!(
                    f,
                    "vector binding length mismatch: key has {} elements, value has {}",
                    key_len, val_len
                )
            }
            Error::NotAVariable { position } => {
                write!(f, "vector key element at position {} is not a variable", position)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
