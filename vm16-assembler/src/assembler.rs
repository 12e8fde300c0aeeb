//! Main assembler logic

use vm16_spec::{encoding, Program};

use crate::error::Result;
use crate::parser::parse_listing;

/// Assemble listing text into a program
pub fn assemble(source: &str) -> Result<Program> {
    let values = parse_listing(source)?;
    Ok(Program::from_values(&values)?)
}

/// Assemble listing text straight into a program image
pub fn assemble_to_bytes(source: &str) -> Result<Vec<u8>> {
    let values = parse_listing(source)?;
    Ok(encoding::encode(&values)?)
}
