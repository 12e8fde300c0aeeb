//! # VM16 Disassembler
//!
//! Decode VM16 program images and render them for inspection.
//!
//! Images are headerless, so any even-length byte stream decodes. Use
//! [`verify`] to check an image against the program it was built from.
//!
//! ## Example
//!
//! ```rust
//! use vm16_disassembler::{decode, disassemble, format_listing};
//!
//! let bytes = [9, 0, 0, 128, 1, 128, 4, 0, 19, 0, 0, 128];
//! let program = decode(&bytes).unwrap();
//!
//! assert_eq!(format_listing(&program), "9,32768,32769,4,19,32768");
//! println!("{}", disassemble(&program));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::disassemble;
pub use decoder::{compare, decode, verify};
pub use formatter::{format_listing, format_word};
