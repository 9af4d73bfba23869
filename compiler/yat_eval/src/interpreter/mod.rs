//! Tree-walking interpreter.
//!
//! `eval(node, scope)` is the recursive contract: one match arm per AST node
//! kind, each reading or writing the scope chain through the `Environment`
//! and producing a `Value`. Errors propagate unchanged through `?`.

mod builder;
mod function_call;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use yat_ir::{Function, Name, Node, StringInterner};

use crate::errors::{input_exhausted, input_failed, invalid_input, undefined_variable};
use crate::{
    evaluate_binary, evaluate_unary, Environment, EvalResult, ScopeId, SharedInputHandler,
    SharedPrintHandler, Value,
};

/// Tree-walking interpreter for Yat programs.
///
/// The lifetime `'a` covers both the interner and the AST: scopes store
/// function values as borrows into the program being run.
pub struct Interpreter<'a> {
    /// Resolves names for error messages.
    interner: &'a StringInterner,
    /// Scope arena; the root scope holds top-level definitions.
    pub(crate) env: Environment<'a>,
    /// Output channel for `Print`.
    print_handler: SharedPrintHandler,
    /// Input channel for `Read`.
    input_handler: SharedInputHandler,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with an empty root scope, printing to stdout and
    /// reading from stdin.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Handle of the root scope.
    pub fn root(&self) -> ScopeId {
        self.env.root()
    }

    pub fn env(&self) -> &Environment<'a> {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment<'a> {
        &mut self.env
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn input_handler(&self) -> &SharedInputHandler {
        &self.input_handler
    }

    /// Evaluate a top-level statement sequence in the root scope.
    ///
    /// Returns the last statement's value, or `Void` for an empty program.
    /// The first failing statement aborts the run.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn run(&mut self, program: &'a [Node]) -> EvalResult<'a> {
        let root = self.root();
        let result = self.eval_block(program, root);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "run aborted");
        }
        result
    }

    /// Evaluate one node against `scope`.
    pub fn eval(&mut self, node: &'a Node, scope: ScopeId) -> EvalResult<'a> {
        tracing::trace!(kind = node.kind_name(), "eval");
        match node {
            Node::Number(n) => Ok(Value::Number(*n)),
            Node::Reference(name) => self.lookup(*name, scope),
            Node::Unary { op, operand } => {
                let value = self.eval(operand, scope)?;
                evaluate_unary(value, *op)
            }
            Node::Binary { op, left, right } => {
                // Left fully evaluated before right: operands may print or read.
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                evaluate_binary(left, right, *op)
            }
            Node::Function(function) => self.eval_function(function, scope),
            Node::FunctionDefinition { name, function } => {
                let value = Value::Function(function);
                self.env.set(scope, *name, value);
                Ok(value)
            }
            Node::FunctionCall { callee, args } => self.eval_call(callee, args, scope),
            Node::Conditional {
                condition,
                if_true,
                if_false,
            } => self.eval_conditional(condition, if_true, if_false.as_deref(), scope),
            Node::Print(expr) => {
                let value = self.eval(expr, scope)?;
                self.print_handler.emit(value.as_int()?);
                Ok(value)
            }
            Node::Read(name) => self.eval_read(*name, scope),
        }
    }

    /// Run `body` statement by statement in `scope`.
    ///
    /// Returns the last value, `Void` if `body` is empty.
    pub fn eval_block(&mut self, body: &'a [Node], scope: ScopeId) -> EvalResult<'a> {
        let mut last = Value::Void;
        for stmt in body {
            last = self.eval(stmt, scope)?;
        }
        Ok(last)
    }

    /// Run a function body in `scope`. An empty body yields `Number(0)`.
    pub fn eval_function(&mut self, function: &'a Function, scope: ScopeId) -> EvalResult<'a> {
        if function.body().is_empty() {
            return Ok(Value::Number(0));
        }
        self.eval_block(function.body(), scope)
    }

    /// Look up `name` from `scope` outward.
    fn lookup(&self, name: Name, scope: ScopeId) -> EvalResult<'a> {
        self.env
            .get(scope, name)
            .ok_or_else(|| undefined_variable(self.interner.lookup(name)))
    }

    fn eval_conditional(
        &mut self,
        condition: &'a Node,
        if_true: &'a [Node],
        if_false: Option<&'a [Node]>,
        scope: ScopeId,
    ) -> EvalResult<'a> {
        let taken = self.eval(condition, scope)?.as_int()? != 0;
        let body = if taken && !if_true.is_empty() {
            if_true
        } else {
            if_false.unwrap_or_default()
        };
        self.eval_block(body, scope)
    }

    /// Take one line from the input channel and bind it under `name`.
    ///
    /// See [`parse_int`] for the accepted forms.
    fn eval_read(&mut self, name: Name, scope: ScopeId) -> EvalResult<'a> {
        let line = self
            .input_handler
            .read_line()
            .map_err(|err| input_failed(&err))?
            .ok_or_else(input_exhausted)?;
        let text = line.trim();
        let n = parse_int(text).ok_or_else(|| invalid_input(text))?;
        let value = Value::Number(n);
        self.env.set(scope, name, value);
        Ok(value)
    }
}

/// Parse a decimal integer with an optional sign.
///
/// Digits may be grouped with single `_` separators (`1_000`); a separator
/// may not lead, trail or repeat.
fn parse_int(text: &str) -> Option<i64> {
    let digits = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(text);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    if digits.contains('_') {
        text.replace('_', "").parse().ok()
    } else {
        text.parse().ok()
    }
}
