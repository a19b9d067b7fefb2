//! Tests for the disassembler

use bytecode_system::{disassemble_chunk, disassemble_instruction, Chunk, Opcode, Value};

fn sample_chunk() -> Chunk {
    let mut chunk = Chunk::new();
    chunk.emit_constant(Value::Number(3.0), 1).unwrap();
    chunk.emit_constant(Value::Number(4.0), 1).unwrap();
    chunk.write_opcode(Opcode::Add, 2);
    chunk.write_opcode(Opcode::Return, 2);
    chunk
}

#[test]
fn test_disassemble_chunk_lists_every_instruction() {
    let text = disassemble_chunk(&sample_chunk(), "sum");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "== sum ==",
            "0000    1 CONSTANT            0 '3.000000'",
            "0002    | CONSTANT            1 '4.000000'",
            "0004    2 ADD",
            "0005    | RET",
        ]
    );
}

#[test]
fn test_disassemble_instruction_advances_by_size() {
    let chunk = sample_chunk();
    assert_eq!(disassemble_instruction(&chunk, 0).1, 2);
    assert_eq!(disassemble_instruction(&chunk, 2).1, 4);
    assert_eq!(disassemble_instruction(&chunk, 4).1, 5);
}

#[test]
fn test_disassemble_invalid_constant_index() {
    let mut chunk = Chunk::new();
    chunk.write_opcode(Opcode::Constant, 1);
    chunk.write(9, 1);
    let (text, _) = disassemble_instruction(&chunk, 0);
    assert!(text.ends_with("9 <invalid>"), "got {:?}", text);
}

#[test]
fn test_disassemble_missing_operand() {
    let mut chunk = Chunk::new();
    chunk.write_opcode(Opcode::Constant, 1);
    let (text, next) = disassemble_instruction(&chunk, 0);
    assert!(text.contains("<missing operand>"));
    assert_eq!(next, 2);
}

#[test]
fn test_disassemble_empty_chunk() {
    assert_eq!(disassemble_chunk(&Chunk::new(), "empty"), "== empty ==\n");
}
