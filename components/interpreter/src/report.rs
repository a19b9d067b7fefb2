//! Runtime error reporting

use std::io::Write;

use core_types::{ErrorKind, RuntimeError};
use tracing::{debug, warn};

use crate::context::ExecutionContext;
use crate::stack::Stack;

/// Message for a binary operator given a non-number
pub const OPERANDS_MUST_BE_NUMBERS: &str = "Operands must be numbers.";

/// Message for a unary operator or constant load given a non-number
pub const OPERAND_MUST_BE_A_NUMBER: &str = "Operand must be a number.";

/// Report a runtime type error.
///
/// Writes the message and a `[line N] in script` trailer to `err`, where
/// `N` is the line of the instruction that just failed, then resets the
/// stack. The caller ends the run with the returned error.
pub fn runtime_error<E: Write>(
    err: &mut E,
    ctx: &ExecutionContext<'_>,
    stack: &mut Stack,
    message: &str,
) -> RuntimeError {
    let error = RuntimeError::new(ErrorKind::TypeError, message, ctx.current_line());

    if let Err(e) = writeln!(err, "{}", error) {
        warn!(error = %e, "failed to write runtime error");
    }

    debug!(
        line = error.line,
        offset = ctx.instruction_pointer,
        reason = message,
        "runtime error"
    );
    stack.reset();
    error
}
