//! Yat IR - identifiers, operators and the AST node set.
//!
//! This crate contains the data structures the evaluator walks:
//! - `Name` for interned identifiers, produced by `StringInterner`
//! - `BinaryOp` / `UnaryOp`, the closed operator set
//! - `Node` and `Function`, the immutable AST
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: strings become `Name(u32)` once, at construction
//! - **Reject early**: operator symbols are validated when a node is built

pub mod ast;
mod interner;
mod name;
mod operators;

pub use ast::{Function, Node};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use operators::{BinaryOp, OperatorError, UnaryOp};
