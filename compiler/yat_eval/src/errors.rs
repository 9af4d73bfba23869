//! Error types and centralized error constructors for the evaluator.
//!
//! `EvalErrorKind` provides typed error categories; the factory functions
//! below are the public way to build errors and populate both `kind` and
//! `message`. Nothing in the evaluator catches these: every failure aborts
//! the current top-level statement and propagates through `?`.

use yat_ir::OperatorError;

use crate::Value;

/// Result of evaluation.
pub type EvalResult<'a> = Result<Value<'a>, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Name resolution
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    // Operator
    #[error("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    // Type
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },
    #[error("{type_name} is not callable")]
    NotCallable { type_name: String },

    // Input
    #[error("invalid input: expected an integer, got {input:?}")]
    InvalidInput { input: String },
    #[error("input exhausted")]
    InputExhausted,
    #[error("failed to read input: {message}")]
    InputFailed { message: String },
}

/// Coarse grouping of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    NameResolution,
    Operator,
    Arithmetic,
    Type,
    Input,
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UndefinedVariable { .. } => ErrorCategory::NameResolution,
            Self::UnknownOperator { .. } => ErrorCategory::Operator,
            Self::DivisionByZero | Self::ModuloByZero | Self::IntegerOverflow { .. } => {
                ErrorCategory::Arithmetic
            }
            Self::TypeMismatch { .. } | Self::NotCallable { .. } => ErrorCategory::Type,
            Self::InvalidInput { .. } | Self::InputExhausted | Self::InputFailed { .. } => {
                ErrorCategory::Input
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl From<OperatorError> for EvalError {
    fn from(err: OperatorError) -> Self {
        unknown_operator(&err.symbol)
    }
}

// Name Resolution Errors

/// Name not bound anywhere in the scope chain.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

// Operator Errors

/// Unrecognized operator symbol.
#[cold]
pub fn unknown_operator(symbol: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        symbol: symbol.to_string(),
    })
}

// Arithmetic Errors

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Type Errors

/// Operand of the wrong kind.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Callee is not a function.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

// Input Errors

/// Input line that does not parse as an integer.
#[cold]
pub fn invalid_input(input: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidInput {
        input: input.to_string(),
    })
}

/// No more input to read.
#[cold]
pub fn input_exhausted() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InputExhausted)
}

/// The input channel itself failed.
#[cold]
pub fn input_failed(err: &std::io::Error) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InputFailed {
        message: err.to_string(),
    })
}
