//! Dispatch loop for bytecode execution
//!
//! Fetches one opcode byte at a time, decodes it and applies it to the
//! operand stack until a `Return` or a runtime error ends the run.

use std::io::Write;

use bytecode_system::Opcode;
use core_types::Value;
use tracing::debug;

use crate::context::ExecutionContext;
use crate::error::{InterpretError, InterpretResult};
use crate::report::{runtime_error, OPERANDS_MUST_BE_NUMBERS, OPERAND_MUST_BE_A_NUMBER};
use crate::stack::Stack;
use crate::trace::trace_step;

/// Dispatch handler for executing bytecode
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Stack for intermediate values
    stack: Stack,
    /// Dump stack and instruction before each step
    trace: bool,
}

impl Dispatcher {
    /// Create a new dispatcher with a stack of the given initial capacity
    pub fn new(initial_stack_capacity: usize, trace: bool) -> Self {
        Self {
            stack: Stack::with_capacity(initial_stack_capacity),
            trace,
        }
    }

    /// The operand stack
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Empty the operand stack
    pub fn reset_stack(&mut self) {
        self.stack.reset();
    }

    /// Turn instruction tracing on or off
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Execute bytecode in the given context
    ///
    /// # Arguments
    ///
    /// * `ctx` - The execution context with the chunk and instruction pointer
    /// * `out` - Receives the returned value and the trace, if enabled
    /// * `err` - Receives runtime error diagnostics
    ///
    /// # Returns
    ///
    /// The value popped by `Return`. Runtime type errors are reported to
    /// `err` before being returned.
    pub fn execute<O: Write, E: Write>(
        &mut self,
        ctx: &mut ExecutionContext<'_>,
        out: &mut O,
        err: &mut E,
    ) -> InterpretResult<Value> {
        loop {
            if self.trace {
                trace_step(out, &self.stack, ctx)?;
            }

            let offset = ctx.instruction_pointer;
            let byte = ctx.read_byte().ok_or_else(|| {
                InterpretError::Internal(format!(
                    "instruction pointer ran past the end of the chunk at offset {}",
                    offset
                ))
            })?;
            let opcode = Opcode::try_from(byte).map_err(|unknown| {
                InterpretError::Internal(format!(
                    "unknown opcode {} at offset {}",
                    unknown, offset
                ))
            })?;

            match opcode {
                Opcode::Return => {
                    let value = self.stack.pop();
                    writeln!(out, "{}", value)?;
                    debug!(%value, "chunk returned");
                    return Ok(value);
                }
                Opcode::Constant => {
                    let constant = Self::read_constant(ctx)?;
                    // The operand byte is still unread here, so a failure
                    // reports the line of the opcode.
                    if !constant.is_number() {
                        return Err(self.fail(ctx, err, OPERAND_MUST_BE_A_NUMBER));
                    }
                    ctx.advance(1);
                    self.stack.push(constant);
                }
                Opcode::True => self.stack.push(Value::Bool(true)),
                Opcode::False => self.stack.push(Value::Bool(false)),
                Opcode::Nil => self.stack.push(Value::Nil),

                Opcode::Negate => self.unary_numeric(ctx, err, |n| -n)?,
                Opcode::Inc => self.unary_numeric(ctx, err, |n| n + 1.0)?,
                Opcode::Dec => self.unary_numeric(ctx, err, |n| n - 1.0)?,

                Opcode::Not => {
                    let value = self.stack.pop();
                    self.stack.push(Value::Bool(value.is_falsey()));
                }
                Opcode::And => self.logical_op(|a, b| a && b),
                Opcode::Or => self.logical_op(|a, b| a || b),
                Opcode::Xor => self.logical_op(|a, b| a ^ b),

                Opcode::Equal => self.equality_op(|a, b| a == b),
                Opcode::NotEqual => self.equality_op(|a, b| a != b),

                Opcode::GreaterEqual => self.binary_op(ctx, err, |a, b| Value::Bool(a >= b))?,
                Opcode::Greater => self.binary_op(ctx, err, |a, b| Value::Bool(a > b))?,
                Opcode::LessEqual => self.binary_op(ctx, err, |a, b| Value::Bool(a <= b))?,
                Opcode::Less => self.binary_op(ctx, err, |a, b| Value::Bool(a < b))?,

                Opcode::Add => self.binary_op(ctx, err, |a, b| Value::Number(a + b))?,
                Opcode::Sub => self.binary_op(ctx, err, |a, b| Value::Number(a - b))?,
                Opcode::Mult => self.binary_op(ctx, err, |a, b| Value::Number(a * b))?,
                Opcode::Div => self.binary_op(ctx, err, |a, b| Value::Number(a / b))?,
            }
        }
    }

    /// Look up the constant named by the operand byte, without consuming it
    fn read_constant(ctx: &ExecutionContext<'_>) -> InterpretResult<Value> {
        let operand_offset = ctx.instruction_pointer;
        let idx = ctx.peek_byte().ok_or_else(|| {
            InterpretError::Internal(format!(
                "missing constant operand at offset {}",
                operand_offset
            ))
        })?;
        ctx.chunk().constant(idx).ok_or_else(|| {
            InterpretError::Internal(format!(
                "constant index {} out of range at offset {}",
                idx, operand_offset
            ))
        })
    }

    /// Report a runtime type error and turn it into the run's outcome
    fn fail<E: Write>(
        &mut self,
        ctx: &ExecutionContext<'_>,
        err: &mut E,
        message: &str,
    ) -> InterpretError {
        runtime_error(err, ctx, &mut self.stack, message).into()
    }

    /// Apply `op` to the number on top of the stack in place
    fn unary_numeric<E: Write>(
        &mut self,
        ctx: &ExecutionContext<'_>,
        err: &mut E,
        op: impl FnOnce(f64) -> f64,
    ) -> InterpretResult<()> {
        match self.stack.peek_mut(0).as_number_mut() {
            Some(n) => {
                *n = op(*n);
                Ok(())
            }
            None => Err(self.fail(ctx, err, OPERAND_MUST_BE_A_NUMBER)),
        }
    }

    /// Pop two numbers (right first) and push `op(left, right)`
    fn binary_op<E: Write>(
        &mut self,
        ctx: &ExecutionContext<'_>,
        err: &mut E,
        op: impl FnOnce(f64, f64) -> Value,
    ) -> InterpretResult<()> {
        let (a, b) = match (self.stack.peek(1), self.stack.peek(0)) {
            (Value::Number(a), Value::Number(b)) => (a, b),
            _ => return Err(self.fail(ctx, err, OPERANDS_MUST_BE_NUMBERS)),
        };
        self.stack.pop();
        self.stack.pop();
        self.stack.push(op(a, b));
        Ok(())
    }

    /// Pop two values, combine their truthiness, push the result
    fn logical_op(&mut self, op: impl FnOnce(bool, bool) -> bool) {
        let b = self.stack.pop();
        let a = self.stack.pop();
        self.stack.push(Value::Bool(op(!a.is_falsey(), !b.is_falsey())));
    }

    /// Pop two values, compare them, push the result
    fn equality_op(&mut self, op: impl FnOnce(Value, Value) -> bool) {
        let b = self.stack.pop();
        let a = self.stack.pop();
        self.stack.push(Value::Bool(op(a, b)));
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(crate::stack::DEFAULT_STACK_CAPACITY, false)
    }
}
