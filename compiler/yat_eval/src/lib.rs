#![deny(clippy::arithmetic_side_effects)]
//! Yat Eval - tree-walking evaluator for Yat programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: an arena of scope frames addressed by `ScopeId`, each
//!   holding its own bindings and a parent handle
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Interpreter`: the recursive `eval(node, scope)` contract, one match arm
//!   per AST node kind
//! - `PrintHandler` / `InputHandler`: the output and input channels used by
//!   `Print` and `Read`
//!
//! # Debugging
//!
//! Enable tracing with `RUST_LOG=yat_eval=debug` (function calls) or
//! `RUST_LOG=yat_eval=trace` (scopes and I/O) after calling [`init_tracing`].

mod environment;
pub mod errors;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod tracing_setup;
mod unary_operators;
mod value;

pub use environment::{Environment, ScopeId};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use input_handler::{
    buffer_input, stdin_handler, BufferInputHandler, InputHandlerImpl, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use tracing_setup::init_tracing;
pub use unary_operators::evaluate_unary;
pub use value::Value;

#[cfg(test)]
mod tests;
