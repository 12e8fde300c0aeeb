//! # VM16 Specification
//!
//! Core types and binary encoding for VM16 program images.
//!
//! ## Overview
//!
//! A VM16 program is an ordered sequence of 16-bit words. Opcodes and operands
//! share the same word slots; telling them apart is the virtual machine's job.
//! Program images on disk are headerless:
//! - Byte `2i` holds the low byte of word `i`
//! - Byte `2i + 1` holds the high byte of word `i`
//! - File length is always even, word count is `len / 2`
//!
//! ## Example
//!
//! ```rust
//! use vm16_spec::{encoding, Program};
//!
//! let program = Program::from_values(&[9, 32768, 32769, 4, 19, 32768]).unwrap();
//! let bytes = program.to_bytes();
//! assert_eq!(bytes, [9, 0, 0, 128, 1, 128, 4, 0, 19, 0, 0, 128]);
//!
//! let words = encoding::decode(&bytes).unwrap();
//! assert_eq!(words, program.words());
//! ```

pub mod encoding;
pub mod error;
pub mod program;

pub use encoding::{decode, encode, encode_words};
pub use error::{CodecError, CodecResult, ErrorKind};
pub use program::Program;

/// One program word (opcode or operand slot)
pub type Word = u16;

/// Largest value a word can hold
pub const WORD_MAX: Word = Word::MAX;

/// Bytes occupied by one encoded word
pub const WORD_BYTES: usize = 2;

