//! Listing parser

use std::num::IntErrorKind;
use std::ops::Range;

use logos::Logos;
use tracing::debug;

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// Parse a comma-separated listing into raw integers.
///
/// Values are not range-checked here; see [`crate::assemble`].
pub fn parse_listing(source: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    // Source span of the word currently being collected
    let mut slot: Option<Range<usize>> = None;

    let mut lexer = Token::lexer(source);
    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(Token::Comma) => {
                let position = values.len();
                let span = slot.take().ok_or(AssemblerError::EmptyToken { position })?;
                values.push(parse_value(&source[span], position)?);
            }
            Ok(Token::Literal) | Err(()) => {
                slot = Some(match slot {
                    Some(open) => open.start..span.end,
                    None => span,
                });
            }
        }
    }

    match slot {
        Some(span) => {
            let position = values.len();
            values.push(parse_value(&source[span], position)?);
        }
        // Trailing comma
        None if !values.is_empty() => {
            return Err(AssemblerError::EmptyToken { position: values.len() });
        }
        None => {}
    }

    debug!(tokens = values.len(), "parsed listing");
    Ok(values)
}

/// Parse one decimal token
pub fn parse_value(token: &str, position: usize) -> Result<i64> {
    let token = token.trim();
    if token.is_empty() {
        return Err(AssemblerError::EmptyToken { position });
    }

    token.parse::<i64>().map_err(|err| AssemblerError::InvalidToken {
        position,
        token: token.to_string(),
        reason: match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "number too large",
            _ => "not a decimal integer",
        },
    })
}
