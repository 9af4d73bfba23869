//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{stdin_handler, stdout_handler, Environment, SharedInputHandler, SharedPrintHandler};
use yat_ir::StringInterner;

/// Builder for creating Interpreter instances.
///
/// Defaults: an empty environment, output to stdout, input from stdin.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    env: Option<Environment<'a>>,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            env: None,
            print_handler: None,
            input_handler: None,
        }
    }

    /// Start from a pre-populated environment.
    #[must_use]
    pub fn env(mut self, env: Environment<'a>) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the output channel for `Print`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the input channel for `Read`.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
        }
    }
}
