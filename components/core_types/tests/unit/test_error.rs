//! Unit tests for RuntimeError, CompileError and ErrorKind

use core_types::{CompileError, ErrorKind, RuntimeError};

#[cfg(test)]
mod runtime_error_tests {
    use super::*;

    #[test]
    fn test_runtime_error_fields() {
        let error = RuntimeError::new(ErrorKind::TypeError, "Operands must be numbers.", 12);
        assert_eq!(error.kind, ErrorKind::TypeError);
        assert_eq!(error.message, "Operands must be numbers.");
        assert_eq!(error.line, 12);
    }

    #[test]
    fn test_runtime_error_display_has_line_trailer() {
        let error = RuntimeError::new(ErrorKind::TypeError, "Operands must be numbers.", 2);
        assert_eq!(
            error.to_string(),
            "Operands must be numbers.\n[line 2] in script"
        );
    }

    #[test]
    fn test_runtime_error_is_std_error() {
        let error = RuntimeError::new(ErrorKind::TypeError, "x", 1);
        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert!(boxed.to_string().starts_with('x'));
    }

    #[test]
    fn test_runtime_error_clone_eq() {
        let error = RuntimeError::new(ErrorKind::TypeError, "x", 1);
        assert_eq!(error.clone(), error);
    }
}

#[cfg(test)]
mod compile_error_tests {
    use super::*;

    #[test]
    fn test_compile_error_fields() {
        let error = CompileError::new("Expected a constant operand.", 5);
        assert_eq!(error.message, "Expected a constant operand.");
        assert_eq!(error.line, 5);
    }

    #[test]
    fn test_compile_error_display() {
        let error = CompileError::new("Too many constants in one chunk.", 300);
        assert_eq!(
            error.to_string(),
            "[line 300] Error: Too many constants in one chunk."
        );
    }

    #[test]
    fn test_error_kind_debug() {
        let debug_str = format!("{:?}", ErrorKind::TypeError);
        assert!(debug_str.contains("TypeError"));
    }
}
