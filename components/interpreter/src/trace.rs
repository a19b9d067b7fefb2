//! Instruction trace output
//!
//! When tracing is enabled the dispatcher writes, before every step, the
//! whole operand stack followed by the disassembly of the instruction it is
//! about to run.

use std::io::{self, Write};

use bytecode_system::disassemble_instruction;

use crate::context::ExecutionContext;
use crate::stack::Stack;

/// Render the stack bottom to top, one `[ value ]` line per slot, followed
/// by a blank line
pub fn show_stack(stack: &Stack) -> String {
    let mut out = String::new();
    for value in stack.iter() {
        out.push_str(&format!("[ {} ]\n", value));
    }
    out.push('\n');
    out
}

/// Write the stack and the next instruction to `out`
pub fn trace_step<O: Write>(
    out: &mut O,
    stack: &Stack,
    ctx: &ExecutionContext<'_>,
) -> io::Result<()> {
    out.write_all(show_stack(stack).as_bytes())?;
    let (text, _) = disassemble_instruction(ctx.chunk(), ctx.instruction_pointer);
    writeln!(out, "{}", text)
}
