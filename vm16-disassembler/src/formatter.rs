//! Word and listing formatting

use vm16_spec::encoding::split_word;
use vm16_spec::{Program, Word, WORD_BYTES};

/// Format one dump line: address, stored bytes, hex and decimal value
pub fn format_word(address: usize, word: Word) -> String {
    let (low, high) = split_word(word);
    format!(
        "0x{:04X}:  {:02X} {:02X}  0x{:04X}  {}",
        address * WORD_BYTES,
        low,
        high,
        word,
        word
    )
}

/// Format a program as a canonical comma-separated listing
pub fn format_listing(program: &Program) -> String {
    program.to_string()
}
