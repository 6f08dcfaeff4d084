//! Runtime values and the operands that produce them.
//!
//! A [`Value`] is plain data. An [`Argument`] is what an operation carries in
//! its operand slots: either a literal value or a [`Binding`] that must be
//! looked up in the current environment before it can be used.

use std::borrow::Borrow;
use std::fmt;

/// A name such as `x` which resolves to a value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binding(String);

impl Binding {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Binding {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Binding {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Binding {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Float,
    Integer,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Float => "float",
            ValueKind::Integer => "integer",
        };
        f.write_str(name)
    }
}

/// A concrete value.
///
/// Values are immutable once built and are copied whenever an operation
/// reads them out of an environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text
    Text(String),
    /// IEEE-754 double
    Float(f64),
    /// 64-bit signed integer
    Integer(i64),
}

impl Value {
    /// Create a text value.
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Float(_) => ValueKind::Float,
            Value::Integer(_) => ValueKind::Integer,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Float(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::text(value)
    }
}

/// An operand of an operation. If a binding, it will need to be resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Value(Value),
    Binding(Binding),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Value(value) => write!(f, "{value}"),
            Argument::Binding(binding) => write!(f, "`{binding}`"),
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

impl From<Binding> for Argument {
    fn from(binding: Binding) -> Self {
        Argument::Binding(binding)
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Value(Value::Integer(value))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Value(Value::Float(value))
    }
}

/// Bare strings are binding references. Use [`Value::text`] for text literals.
impl From<&str> for Argument {
    fn from(name: &str) -> Self {
        Argument::Binding(Binding::from(name))
    }
}
