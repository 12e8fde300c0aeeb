//! VM16 Assembler
//!
//! Assemble comma-separated VM16 program listings into program images.
//!
//! ## Example
//!
//! ```rust
//! use vm16_assembler::assemble;
//!
//! let source = r#"
//!     ## r0 = r1 + 4, then print r0
//!     9, 32768, 32769, 4,
//!     19, 32768
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.len(), 6);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::{assemble, assemble_to_bytes};
pub use parser::{parse_listing, parse_value};
