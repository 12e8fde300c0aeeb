//! Main disassembler logic

use vm16_spec::Program;

use crate::formatter::format_word;

/// Disassemble a program into an annotated word dump
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    output.push_str("; VM16 program image\n");
    output.push_str(&format!(
        "; Size: {} bytes ({} words)\n",
        program.byte_len(),
        program.len()
    ));
    output.push('\n');

    for (index, &word) in program.words().iter().enumerate() {
        output.push_str(&format_word(index, word));
        output.push('\n');
    }

    output
}
