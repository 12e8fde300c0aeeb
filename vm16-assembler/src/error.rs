//! Assembler errors

use thiserror::Error;
use vm16_spec::{CodecError, ErrorKind};

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Empty token at position {position}")]
    EmptyToken { position: usize },

    #[error("Invalid token at position {position}: {token:?} ({reason})")]
    InvalidToken {
        position: usize,
        token: String,
        reason: &'static str,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl AssemblerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssemblerError::EmptyToken { .. } | AssemblerError::InvalidToken { .. } => {
                ErrorKind::Format
            }
            AssemblerError::Codec(err) => err.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
