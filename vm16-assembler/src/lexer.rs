//! # Lexer for VM16 program listings

use logos::Logos;

/// Tokens for a comma-separated listing
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")] // Line breaks count as whitespace
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Separator between words
    #[token(",")]
    Comma,

    /// Candidate word text; validated by the parser
    #[regex(r"[^,#\s]+")]
    Literal,
}
