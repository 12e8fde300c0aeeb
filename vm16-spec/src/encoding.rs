//! # Word Encoding
//!
//! Little-endian packing of 16-bit words into program image bytes.
//!
//! ## Word Layout (2 bytes)
//!
//! ```text
//! offset 2i    : low byte  (word mod 256)
//! offset 2i+1  : high byte (word div 256)
//! ```
//!
//! The split is arithmetic, so the layout does not depend on host byte order.

use crate::error::{CodecError, CodecResult};
use crate::{Word, WORD_BYTES};
use tracing::trace;

/// Radix of one byte
pub const BYTE_RADIX: Word = 256;

// ============================================================================
// Single Word Helpers
// ============================================================================

/// Split a word into its (low, high) bytes
#[inline]
pub const fn split_word(word: Word) -> (u8, u8) {
    ((word % BYTE_RADIX) as u8, (word / BYTE_RADIX) as u8)
}

/// Rebuild a word from its (low, high) bytes
#[inline]
pub const fn join_word(low: u8, high: u8) -> Word {
    high as Word * BYTE_RADIX + low as Word
}

/// Narrow an integer to a word, reporting its position on failure
#[inline]
pub fn check_word(value: i64, position: usize) -> CodecResult<Word> {
    Word::try_from(value).map_err(|_| CodecError::OutOfRange { value, position })
}

/// Size in bytes of `count` encoded words
#[inline]
pub const fn encoded_len(count: usize) -> usize {
    count * WORD_BYTES
}

/// Number of words in a stream of `byte_len` bytes, or `None` if truncated
#[inline]
pub const fn word_count(byte_len: usize) -> Option<usize> {
    if byte_len % WORD_BYTES == 0 {
        Some(byte_len / WORD_BYTES)
    } else {
        None
    }
}

// ============================================================================
// Stream Encoding
// ============================================================================

/// Encode integers into a program image, rejecting anything outside 0..=65535.
///
/// Fails on the first out-of-range value; no partial output is produced.
pub fn encode(values: &[i64]) -> CodecResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(encoded_len(values.len()));
    for (position, &value) in values.iter().enumerate() {
        let (low, high) = split_word(check_word(value, position)?);
        bytes.push(low);
        bytes.push(high);
    }
    trace!(words = values.len(), bytes = bytes.len(), "encoded program image");
    Ok(bytes)
}

/// Encode words that are already known to be in range
pub fn encode_words(words: &[Word]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(encoded_len(words.len()));
    for &word in words {
        let (low, high) = split_word(word);
        bytes.push(low);
        bytes.push(high);
    }
    bytes
}

/// Decode a program image back into words
pub fn decode(bytes: &[u8]) -> CodecResult<Vec<Word>> {
    let count = word_count(bytes.len()).ok_or(CodecError::TruncatedWord { len: bytes.len() })?;

    let mut words = Vec::with_capacity(count);
    for pair in bytes.chunks_exact(WORD_BYTES) {
        words.push(join_word(pair[0], pair[1]));
    }
    trace!(words = words.len(), bytes = bytes.len(), "decoded program image");
    Ok(words)
}
