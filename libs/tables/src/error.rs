//! Errors raised while packing or viewing a classification store

use thiserror::Error;

/// Failures of the packed integer set
///
/// All of these indicate a programming error in whoever builds the
/// tables, never bad user input: a value that does not fit the 32-bit
/// storage format, or a byte window that does not line up with it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntSetError {
    /// Value does not fit in an unsigned 32-bit integer
    #[error("Value {value} is outside the packable range 0..={max}")]
    OutOfRange { value: u64, max: u64 },

    /// Window start or length is not a whole number of entries
    #[error(
        "Byte window at offset {offset} of {length} bytes does not line up with the {width}-byte entry width"
    )]
    Misaligned {
        offset: usize,
        length: usize,
        width: usize,
    },

    /// Requested window lies outside the backing buffer
    #[error("Byte range {start}..{end} is outside the {buffer_len}-byte buffer")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        buffer_len: usize,
    },
}

/// Result type for packed set operations
pub type IntSetResult<T> = std::result::Result<T, IntSetError>;
