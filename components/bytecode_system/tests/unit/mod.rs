//! Unit tests for bytecode_system components

mod test_debug;
mod test_opcode;
