//! Function call evaluation methods for the Interpreter.

use yat_ir::Node;

use super::Interpreter;
use crate::errors::not_callable;
use crate::{EvalResult, ScopeId, Value};

impl<'a> Interpreter<'a> {
    /// Evaluate a function call.
    ///
    /// The callee and every argument are evaluated in the calling scope, left
    /// to right. The body then runs in a fresh child of the calling scope
    /// (not of the scope the function was defined in) with parameters bound
    /// positionally. Surplus arguments are dropped; a parameter without an
    /// argument stays unbound and only fails if the body references it.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = callee.kind_name(), args = args.len())
    )]
    pub(super) fn eval_call(
        &mut self,
        callee: &'a Node,
        args: &'a [Node],
        scope: ScopeId,
    ) -> EvalResult<'a> {
        let func = match self.eval(callee, scope)? {
            Value::Function(func) => func,
            other => return Err(not_callable(other.type_name())),
        };

        let arg_values = args
            .iter()
            .map(|arg| self.eval(arg, scope))
            .collect::<Result<Vec<_>, _>>()?;

        if arg_values.len() != func.arity() {
            tracing::debug!(
                params = func.arity(),
                args = arg_values.len(),
                "arity differs, binding positionally"
            );
        }

        let bindings = func.params().iter().copied().zip(arg_values);
        self.with_bindings(scope, bindings, |scoped, call_scope| {
            scoped.eval_function(func, call_scope)
        })
    }
}
