//! Program image decoder

use vm16_spec::Program;

use crate::error::{DisassemblerError, Result};

/// Decode a program image
pub fn decode(bytes: &[u8]) -> Result<Program> {
    Ok(Program::from_bytes(bytes)?)
}

/// Decode `bytes` and check that it holds exactly `expected`
pub fn verify(bytes: &[u8], expected: &Program) -> Result<Program> {
    let found = decode(bytes)?;
    compare(expected, &found)?;
    Ok(found)
}

/// Check that `found` holds exactly `expected`.
///
/// Reports the first differing word, or a length mismatch when one program
/// is a prefix of the other.
pub fn compare(expected: &Program, found: &Program) -> Result<()> {
    let mismatch = expected
        .words()
        .iter()
        .zip(found.words())
        .position(|(e, f)| e != f);
    if let Some(position) = mismatch {
        return Err(DisassemblerError::WordMismatch {
            position,
            expected: expected.words()[position],
            found: found.words()[position],
        });
    }

    if expected.len() != found.len() {
        return Err(DisassemblerError::LengthMismatch {
            expected: expected.len(),
            found: found.len(),
        });
    }

    Ok(())
}
