//! Disassembler errors

use thiserror::Error;
use vm16_spec::{CodecError, ErrorKind, Word};

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Word count mismatch: expected {expected} words, found {found} words")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Word mismatch at position {position}: expected {expected}, found {found}")]
    WordMismatch {
        position: usize,
        expected: Word,
        found: Word,
    },
}

impl DisassemblerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DisassemblerError::Codec(err) => err.kind(),
            DisassemblerError::LengthMismatch { .. } | DisassemblerError::WordMismatch { .. } => {
                ErrorKind::Format
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
