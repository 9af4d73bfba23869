//! RAII-style scope guards for Interpreter environment management.
//!
//! The guard holds `&mut Interpreter` together with the handle of the scope
//! it pushed, and pops that scope when dropped, including during unwinding
//! or an early `?` return. It implements `Deref`/`DerefMut`, so evaluation
//! goes through the guard exactly as through the interpreter.
//!
//! ```text
//! let mut scoped = interpreter.scoped(calling_scope);
//! let scope = scoped.scope();
//! scoped.env.set(scope, name, value);
//! scoped.eval_function(func, scope)?;
//! // scope popped here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::ScopeId;
use yat_ir::Name;

/// RAII guard that pops its scope on drop.
pub struct ScopedInterpreter<'guard, 'a> {
    interpreter: &'guard mut Interpreter<'a>,
    scope: ScopeId,
}

impl ScopedInterpreter<'_, '_> {
    /// Handle of the scope owned by this guard.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope(self.scope);
    }
}

impl<'a> Deref for ScopedInterpreter<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a child scope of `parent` and return a guard that pops it on drop.
    pub fn scoped(&mut self, parent: ScopeId) -> ScopedInterpreter<'_, 'a> {
        let scope = self.env.push_scope(parent);
        ScopedInterpreter {
            interpreter: self,
            scope,
        }
    }

    /// Evaluate `f` inside a child scope of `parent` pre-populated with
    /// `bindings`. The scope is popped when `f` returns, even on panic.
    pub fn with_bindings<T, F, I>(&mut self, parent: ScopeId, bindings: I, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>, ScopeId) -> T,
        I: IntoIterator<Item = (Name, crate::Value<'a>)>,
    {
        let mut scoped = self.scoped(parent);
        let scope = scoped.scope();
        for (name, value) in bindings {
            scoped.env.set(scope, name, value);
        }
        f(&mut scoped, scope)
    }
}

#[cfg(test)]
mod tests;
