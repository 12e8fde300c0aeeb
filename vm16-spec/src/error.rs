//! # Error Types for VM16 program images

use thiserror::Error;

/// Broad classification shared by every VM16 error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value does not fit in a 16-bit word
    Range,
    /// Malformed listing text or byte stream
    Format,
    /// Failure reading or writing storage
    Io,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Value out of range at position {position}: {value} (valid range: 0-65535)")]
    OutOfRange { value: i64, position: usize },

    #[error("Truncated word at end of stream: {len} bytes is not a whole number of words")]
    TruncatedWord { len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::OutOfRange { .. } => ErrorKind::Range,
            CodecError::TruncatedWord { .. } => ErrorKind::Format,
            CodecError::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
