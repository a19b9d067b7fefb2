//! Runtime value representation.
//!
//! This module provides the `Value` enum, a tagged union over the only
//! three runtime types the VM knows about: nil, booleans and numbers.

use std::fmt;

/// Represents any runtime value.
///
/// Values are small and `Copy`; the payload is only ever read through the
/// variant it belongs to. Truthiness is an explicit conversion
/// ([`Value::is_falsey`]), never an implicit property of the payload.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let nil = Value::nil();
/// let flag = Value::bool(true);
/// let number = Value::number(3.5);
///
/// assert!(nil.is_falsey());
/// assert!(!flag.is_falsey());
/// assert_eq!(number.as_number(), Some(3.5));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub enum Value {
    /// The absence of a value
    #[default]
    Nil,
    /// A boolean (true or false)
    Bool(bool),
    /// IEEE 754 double-precision floating point
    Number(f64),
}

impl Value {
    /// Create a nil value
    pub const fn nil() -> Self {
        Value::Nil
    }

    /// Create a boolean value
    pub const fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create a number value
    pub const fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Check if value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Check if value is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Get the boolean payload, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the numeric payload, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get a mutable reference to the numeric payload.
    ///
    /// Used by the in-place unary operators (negate, increment, decrement),
    /// which change the payload of a stack slot without changing its kind.
    pub fn as_number_mut(&mut self) -> Option<&mut f64> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns whether this value is falsey.
    ///
    /// Only `nil` and `false` are falsey. Every other value is truthy,
    /// including the number zero and NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(Value::Nil.is_falsey());
    /// assert!(Value::Bool(false).is_falsey());
    ///
    /// assert!(!Value::Bool(true).is_falsey());
    /// assert!(!Value::Number(0.0).is_falsey());
    /// assert!(!Value::Number(f64::NAN).is_falsey());
    /// ```
    pub fn is_falsey(&self) -> bool {
        matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Name of this value's kind, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
        }
    }
}

/// Kind-aware equality.
///
/// Values of different kinds are never equal, so `true` and `1` compare
/// unequal. Numbers follow IEEE 754, so NaN is unequal to itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// Textual form used by the return instruction and the stack dump.
///
/// - nil → "nil"
/// - boolean → "true" or "false"
/// - number → fixed notation with six decimals ("7.000000"), with
///   "inf", "-inf" and "nan" for the non-finite cases
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Nil.to_string(), "nil");
/// assert_eq!(Value::Bool(false).to_string(), "false");
/// assert_eq!(Value::Number(7.0).to_string(), "7.000000");
/// assert_eq!(Value::Number(-0.5).to_string(), "-0.500000");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "nan")
                } else if n.is_infinite() {
                    write!(f, "{}", if n.is_sign_positive() { "inf" } else { "-inf" })
                } else {
                    write!(f, "{:.6}", n)
                }
            }
        }
    }
}
