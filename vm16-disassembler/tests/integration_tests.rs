//! Integration tests for the VM16 disassembler
//!
//! Tests the reverse path of the toolchain:
//! - Image decoding
//! - Listing and dump formatting
//! - Verification against assembled listings

use vm16_assembler::{assemble, assemble_to_bytes};
use vm16_disassembler::{decode, disassemble, format_listing, verify, DisassemblerError};
use vm16_spec::{CodecError, ErrorKind};

const SAMPLE: &str = "9,32768,32769,4,19,32768";

// ============================================================================
// Decode Tests
// ============================================================================

#[test]
fn test_decode_sample_image() {
    let bytes = [9, 0, 0, 128, 1, 128, 4, 0, 19, 0, 0, 128];
    let program = decode(&bytes).unwrap();
    assert_eq!(program.words(), &[9, 32768, 32769, 4, 19, 32768]);
}

#[test]
fn test_decode_empty_image() {
    assert!(decode(&[]).unwrap().is_empty());
}

#[test]
fn test_decode_odd_lengths() {
    for len in [1usize, 3, 5, 11] {
        let bytes = vec![0u8; len];
        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(
            err,
            DisassemblerError::Codec(CodecError::TruncatedWord { .. })
        ));
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

#[test]
fn test_listing_roundtrip_through_image() {
    let bytes = assemble_to_bytes(" 9, 32768 ,32769,4 ,19,32768").unwrap();
    let program = decode(&bytes).unwrap();
    assert_eq!(format_listing(&program), SAMPLE);
}

#[test]
fn test_disassemble_sample() {
    let program = assemble(SAMPLE).unwrap();
    let asm = disassemble(&program);

    assert!(asm.contains("12 bytes (6 words)"));
    assert!(asm.contains("0x0000:  09 00  0x0009  9"));
    assert!(asm.contains("0x0002:  00 80  0x8000  32768"));
    assert!(asm.contains("0x0004:  01 80  0x8001  32769"));
    assert!(asm.contains("0x000A:  00 80  0x8000  32768"));
}

#[test]
fn test_disassemble_line_per_word() {
    let program = assemble(SAMPLE).unwrap();
    let asm = disassemble(&program);
    let word_lines = asm.lines().filter(|l| l.starts_with("0x")).count();
    assert_eq!(word_lines, program.len());
}

// ============================================================================
// Verification Tests
// ============================================================================

#[test]
fn test_verify_assembled_image() {
    let expected = assemble(SAMPLE).unwrap();
    let bytes = assemble_to_bytes(SAMPLE).unwrap();
    assert_eq!(verify(&bytes, &expected).unwrap(), expected);
}

#[test]
fn test_verify_detects_patched_operand() {
    let expected = assemble(SAMPLE).unwrap();
    let mut bytes = assemble_to_bytes(SAMPLE).unwrap();
    // Swap the literal 4 for 33 ('!')
    bytes[6] = 33;

    let err = verify(&bytes, &expected).unwrap_err();
    assert!(matches!(
        err,
        DisassemblerError::WordMismatch { position: 3, expected: 4, found: 33 }
    ));
}

#[test]
fn test_verify_detects_extra_words() {
    let expected = assemble("21").unwrap();
    let err = verify(&[21, 0, 0, 0], &expected).unwrap_err();
    assert!(matches!(
        err,
        DisassemblerError::LengthMismatch { expected: 1, found: 2 }
    ));
}

#[test]
fn test_verify_truncated_image() {
    let expected = assemble("21").unwrap();
    let err = verify(&[21], &expected).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}
