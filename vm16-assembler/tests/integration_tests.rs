//! Integration tests for the VM16 assembler

use proptest::prelude::*;
use vm16_assembler::{assemble, assemble_to_bytes, parse_listing};
use vm16_spec::{Program, Word};

#[test]
fn test_sample_listing_bytes() {
    let bytes = assemble_to_bytes("9,32768,32769,4,19,32768").unwrap();
    assert_eq!(bytes.len(), 12);
    assert_eq!(bytes, vec![9, 0, 0, 128, 1, 128, 4, 0, 19, 0, 0, 128]);
}

#[test]
fn test_assemble_matches_assemble_to_bytes() {
    let source = "21, 21, 19, 33, 0";
    let program = assemble(source).unwrap();
    assert_eq!(program.to_bytes(), assemble_to_bytes(source).unwrap());
}

#[test]
fn test_boundary_values() {
    let program = assemble("0,255,256,32767,32768,65535").unwrap();
    assert_eq!(program.words(), &[0, 255, 256, 32767, 32768, 65535]);
    assert_eq!(
        program.to_bytes(),
        vec![0, 0, 255, 0, 0, 1, 255, 127, 0, 128, 255, 255]
    );
}

#[test]
fn test_multiline_listing_with_comments() {
    let source = r#"
        # set r0 = r1 + 33
        9, 32768, 32769, 33,
        # out r0
        19, 32768
    "#;
    let program = assemble(source).unwrap();
    assert_eq!(program.to_string(), "9,32768,32769,33,19,32768");
}

#[test]
fn test_explicit_plus_sign() {
    assert_eq!(parse_listing("+7").unwrap(), vec![7]);
}

#[test]
fn test_single_word() {
    let program = assemble("  0  ").unwrap();
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_bytes(), vec![0, 0]);
}

proptest! {
    #[test]
    fn test_display_parse_roundtrip(words in prop::collection::vec(any::<Word>(), 0..64)) {
        let program = Program::new(words);
        let reparsed = assemble(&program.to_string()).unwrap();
        prop_assert_eq!(reparsed, program);
    }

    #[test]
    fn test_padding_is_ignored(
        words in prop::collection::vec(any::<Word>(), 1..32),
        pad in "[ \t]{0,3}",
    ) {
        let source = words
            .iter()
            .map(|w| format!("{pad}{w}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        let program = assemble(&source).unwrap();
        prop_assert_eq!(program.words(), &words[..]);
    }
}
