//! Runtime values.

use std::fmt;

use yat_ir::Function;

use crate::errors::{type_mismatch, EvalError};

/// A runtime value.
///
/// `Number` is the only data value; booleans are the integers 0 and 1 and any
/// nonzero integer is true. Functions are stored by reference into the AST,
/// which outlives every scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    Number(i64),
    Function(&'a Function),
    /// Result of a conditional that ran no statements.
    ///
    /// Distinct from `Number(0)`; using it as an integer is a type mismatch.
    Void,
}

impl<'a> Value<'a> {
    /// Boolean as a 0/1 number.
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Number(i64::from(b))
    }

    /// Extract the integer, failing for functions and `Void`.
    #[inline]
    pub fn as_int(self) -> Result<i64, EvalError> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(type_mismatch("number", other.type_name())),
        }
    }

    pub fn as_function(self) -> Option<&'a Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_void(self) -> bool {
        matches!(self, Value::Void)
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Function(_) => "function",
            Value::Void => "void",
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Function(func) => write!(f, "<function/{}>", func.arity()),
            Value::Void => write!(f, "void"),
        }
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}
