//! Assembler error helpers

use core_types::CompileError;

/// Create an error for a mnemonic that names no opcode
pub fn unknown_instruction(name: &str, line: u32) -> CompileError {
    CompileError::new(format!("Unknown instruction '{}'.", name), line)
}

/// Create an error for an instruction missing its operand
pub fn missing_operand(mnemonic: &str, line: u32) -> CompileError {
    CompileError::new(format!("Expected an operand after '{}'.", mnemonic), line)
}

/// Create an error for an operand given to an instruction that takes none
pub fn unexpected_operand(mnemonic: &str, operand: &str, line: u32) -> CompileError {
    CompileError::new(
        format!("Unexpected operand '{}' after '{}'.", operand, mnemonic),
        line,
    )
}

/// Create an error for an operand that is not a literal
pub fn invalid_literal(text: &str, line: u32) -> CompileError {
    CompileError::new(format!("Invalid literal '{}'.", text), line)
}

/// Create an error for an instruction that would pop an empty stack
pub fn stack_underflow(mnemonic: &str, line: u32) -> CompileError {
    CompileError::new(
        format!("Not enough operands on the stack for '{}'.", mnemonic),
        line,
    )
}
