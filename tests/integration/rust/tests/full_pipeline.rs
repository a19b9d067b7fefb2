//! Full Pipeline Integration Tests
//!
//! Source text -> Assembler -> Chunk -> VM -> printed result, driven
//! through `VM::interpret` with the assembler as the compiler.

use assembler::Assembler;
use bytecode_system::Value;
use interpreter::{InterpretError, VmConfig, VM};

fn interpret(source: &str) -> (Result<Value, InterpretError>, String, String) {
    let mut vm: VM<Vec<u8>, Vec<u8>> = VM::with_streams(VmConfig::default(), Vec::new(), Vec::new());
    let result = vm.interpret(source, &mut Assembler::new());
    let (out, err) = vm.into_streams();
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

/// Test: constant 3 plus constant 4 prints 7
#[test]
fn test_pipeline_addition() {
    let (result, out, err) = interpret("CONSTANT 3\nCONSTANT 4\nADD\nRET");
    assert_eq!(result.unwrap(), Value::Number(7.0));
    assert_eq!(out, "7.000000\n");
    assert!(err.is_empty());
}

/// Test: true plus nil is a runtime error on the ADD line
#[test]
fn test_pipeline_type_error() {
    let (result, out, err) = interpret("TRUE\nNIL\nADD\nRET");
    assert!(result.unwrap_err().is_runtime());
    assert!(out.is_empty());
    assert_eq!(err, "Operands must be numbers.\n[line 3] in script\n");
}

/// Test: negating twice restores the value
#[test]
fn test_pipeline_double_negate() {
    let (_, out, _) = interpret("CONSTANT 5\nNEGATE\nNEGATE\nRET");
    assert_eq!(out, "5.000000\n");
}

/// Test: false XOR false
#[test]
fn test_pipeline_xor() {
    let (_, out, _) = interpret("FALSE\nFALSE\nXOR\nRET");
    assert_eq!(out, "false\n");
}

/// Test: lowercase mnemonics and comments
#[test]
fn test_pipeline_lowercase_and_comments() {
    let source = "
        constant 2   ; base
        constant 10
        mult         ; 20
        constant 20
        equal
        ret
    ";
    let (result, out, _) = interpret(source);
    assert_eq!(result.unwrap(), Value::Bool(true));
    assert_eq!(out, "true\n");
}

/// Test: fractional and infinite output formatting
#[test]
fn test_pipeline_number_formatting() {
    let (_, out, _) = interpret("CONSTANT 1\nCONSTANT 3\nDIV\nRET");
    assert_eq!(out, "0.333333\n");

    let (_, out, _) = interpret("CONSTANT -1\nCONSTANT 0\nDIV\nRET");
    assert_eq!(out, "-inf\n");
}

/// Test: assembly errors stop before execution
#[test]
fn test_pipeline_compile_error() {
    let (result, out, err) = interpret("TRUE\nCONSTANT yes\nRET");
    match result {
        Err(InterpretError::Compile(e)) => {
            assert_eq!(e.line, 2);
            assert_eq!(e.to_string(), "[line 2] Error: Invalid literal 'yes'.");
        }
        other => panic!("expected compile error, got {:?}", other),
    }
    assert!(out.is_empty());
    assert!(err.is_empty());
}
