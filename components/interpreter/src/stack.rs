//! Operand stack
//!
//! A contiguous stack of values whose capacity doubles whenever a push finds
//! it full. Capacity is tracked explicitly rather than left to `Vec`, so the
//! growth schedule is exact and observable.

use core_types::Value;
use tracing::trace;

/// Slots allocated for a new stack
pub const DEFAULT_STACK_CAPACITY: usize = 256;

/// The VM's operand stack.
///
/// Popping or peeking below the bottom is a bug in the chunk or in an opcode
/// handler, never a user error, so those operations panic instead of
/// returning a `Result`.
#[derive(Debug, Clone)]
pub struct Stack {
    values: Vec<Value>,
    capacity: usize,
    grow_count: usize,
}

impl Stack {
    /// Create an empty stack with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    /// Create an empty stack with room for `capacity` values (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
            grow_count: 0,
        }
    }

    /// Push a value, doubling capacity first if the stack is full
    pub fn push(&mut self, value: Value) {
        if self.values.len() == self.capacity {
            self.grow();
        }
        self.values.push(value);
    }

    fn grow(&mut self) {
        self.capacity *= 2;
        self.values
            .reserve_exact(self.capacity - self.values.len());
        self.grow_count += 1;
        trace!(capacity = self.capacity, "operand stack grew");
    }

    /// Remove and return the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> Value {
        match self.values.pop() {
            Some(value) => value,
            None => panic!("stack is empty"),
        }
    }

    /// Return a copy of the value `distance` slots below the top.
    ///
    /// # Panics
    ///
    /// Panics if the stack holds `distance` values or fewer.
    pub fn peek(&self, distance: usize) -> Value {
        self.values[self.index_from_top(distance)]
    }

    /// Return a mutable reference to the slot `distance` below the top.
    ///
    /// # Panics
    ///
    /// Panics if the stack holds `distance` values or fewer.
    pub fn peek_mut(&mut self, distance: usize) -> &mut Value {
        let idx = self.index_from_top(distance);
        &mut self.values[idx]
    }

    fn index_from_top(&self, distance: usize) -> usize {
        let len = self.values.len();
        assert!(len > 0, "stack is empty");
        assert!(
            distance < len,
            "peek distance {} exceeds stack depth {}",
            distance,
            len
        );
        len - 1 - distance
    }

    /// Drop every value; capacity is kept
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the stack holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Allocated slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of times the stack has doubled since creation
    pub fn grow_count(&self) -> usize {
        self.grow_count
    }

    /// Iterate from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Live values, bottom first
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
