//! Human-readable disassembly of chunks
//!
//! Output format, one instruction per line:
//!
//! ```text
//! OFFSET LINE MNEMONIC [INDEX 'CONSTANT']
//! 0000    1 CONSTANT            0 '3.000000'
//! 0002    | ADD
//! ```
//!
//! A `|` in the line column means the instruction came from the same source
//! line as the byte before it.

use std::fmt::Write;

use crate::chunk::Chunk;
use crate::opcode::Opcode;

/// Disassemble a whole chunk under a `== name ==` header
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> String {
    let mut out = format!("== {} ==\n", name);
    let mut offset = 0;
    while offset < chunk.len() {
        let (text, next) = disassemble_instruction(chunk, offset);
        out.push_str(&text);
        out.push('\n');
        offset = next;
    }
    out
}

/// Disassemble the instruction at `offset`.
///
/// Returns the rendered line (without a trailing newline) and the offset of
/// the next instruction. Unknown opcode bytes are rendered and skipped one
/// byte at a time.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize) -> (String, usize) {
    let mut out = format!("{:04} ", offset);

    let line = chunk.line_at(offset);
    if offset > 0 && line == chunk.line_at(offset - 1) {
        out.push_str("   | ");
    } else {
        match line {
            Some(line) => {
                let _ = write!(out, "{:4} ", line);
            }
            None => out.push_str("   ? "),
        }
    }

    let byte = match chunk.byte(offset) {
        Some(byte) => byte,
        None => {
            out.push_str("<end of chunk>");
            return (out, offset + 1);
        }
    };

    match Opcode::try_from(byte) {
        Ok(Opcode::Constant) => {
            let (text, next) = constant_instruction(chunk, offset);
            out.push_str(&text);
            (out, next)
        }
        Ok(op) => {
            out.push_str(op.mnemonic());
            (out, offset + op.size())
        }
        Err(unknown) => {
            let _ = write!(out, "Unknown opcode {}", unknown);
            (out, offset + 1)
        }
    }
}

fn constant_instruction(chunk: &Chunk, offset: usize) -> (String, usize) {
    let name = Opcode::Constant.mnemonic();
    let text = match chunk.byte(offset + 1) {
        Some(idx) => match chunk.constant(idx) {
            Some(value) => format!("{:<16} {:4} '{}'", name, idx, value),
            None => format!("{:<16} {:4} <invalid>", name, idx),
        },
        None => format!("{:<16} <missing operand>", name),
    };
    (text, offset + Opcode::Constant.size())
}
