//! End-to-End CLI Integration Tests
//!
//! Tests the complete Orion VM through the orion_cli Runtime API.
//! This is the highest level integration test - source code to final result.

use core_types::Value;
use interpreter::VmConfig;
use orion_cli::{Cli, Runtime};
use std::fs;
use tempfile::TempDir;

fn runtime() -> Runtime<Vec<u8>, Vec<u8>> {
    Runtime::with_streams(VmConfig::default(), Vec::new(), Vec::new())
}

/// Test: comparison chain
#[test]
fn test_e2e_comparison() {
    let mut runtime = runtime();
    let result = runtime
        .execute_string("CONSTANT 3\nCONSTANT 2\nGREATER\nCONSTANT 1\nCONSTANT 1\nGREATER_EQUAL\nAND\nRET")
        .expect("Execution failed");
    assert_eq!(result, Value::Bool(true));
}

/// Test: logical operators treat numbers as truthy
#[test]
fn test_e2e_numbers_are_truthy() {
    let mut runtime = runtime();
    let result = runtime
        .execute_string("CONSTANT 0\nFALSE\nOR\nRET")
        .expect("Execution failed");
    assert_eq!(result, Value::Bool(true));
}

/// Test: a file on disk with the CLI's configuration
#[test]
fn test_e2e_file_with_small_stack() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deep.asm");

    let mut source = String::new();
    for _ in 0..20 {
        source.push_str("CONSTANT 2\n");
    }
    for _ in 0..19 {
        source.push_str("MULT\n");
    }
    source.push_str("RET\n");
    fs::write(&path, source).unwrap();

    let mut cli = Cli::with_file(path.to_str().unwrap());
    cli.stack_capacity = 1;

    let mut runtime: Runtime<Vec<u8>, Vec<u8>> = Runtime::with_streams(cli.vm_config(), Vec::new(), Vec::new());
    let result = runtime.execute_file(&path).expect("Execution failed");

    assert_eq!(result, Value::Number(1048576.0));
    assert_eq!(runtime.vm().stack().grow_count(), 5);
}

/// Test: the runtime keeps working after each kind of failure
#[test]
fn test_e2e_recovers_after_errors() {
    let mut runtime = runtime();

    let compile = runtime.execute_string("BOGUS\nRET").unwrap_err();
    assert_eq!(compile.exit_code(), 65);

    let underflow = runtime.execute_string("RET").unwrap_err();
    assert_eq!(underflow.exit_code(), 65);

    let runtime_err = runtime.execute_string("NIL\nDEC\nRET").unwrap_err();
    assert_eq!(runtime_err.exit_code(), 70);

    let value = runtime.execute_string("CONSTANT 9\nDEC\nRET").unwrap();
    assert_eq!(value, Value::Number(8.0));
    assert_eq!(runtime.vm().output(), b"8.000000\n");
}
