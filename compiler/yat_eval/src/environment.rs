//! Environment for variable scoping in the interpreter.
//!
//! Scopes live in an arena and refer to their parent by handle. A function
//! call pushes one frame whose parent is the calling scope and pops it when
//! the call returns, so frames are always discarded in LIFO order.

use rustc_hash::FxHashMap;

use yat_ir::Name;

use crate::Value;

/// Handle to a scope frame in an [`Environment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The root scope, which lives as long as its environment.
    pub const ROOT: ScopeId = ScopeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
struct Scope<'a> {
    /// Bindings owned by this scope. May shadow bindings in the parent.
    bindings: FxHashMap<Name, Value<'a>>,
    /// Parent scope, `None` for the root.
    parent: Option<ScopeId>,
}

/// Arena of scope frames.
#[derive(Clone, Debug)]
pub struct Environment<'a> {
    /// Live frames; index 0 is the root.
    scopes: Vec<Scope<'a>>,
}

impl<'a> Environment<'a> {
    /// Create a new environment holding only the root scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
        }
    }

    /// Handle of the root scope.
    #[inline]
    pub fn root(&self) -> ScopeId {
        ScopeId::ROOT
    }

    /// Number of live scopes, including the root.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Whether `scope` refers to a live frame.
    pub fn contains(&self, scope: ScopeId) -> bool {
        scope.index() < self.scopes.len()
    }

    /// Push a new child scope of `parent`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` scopes are live at once.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        debug_assert!(self.contains(parent), "parent scope {parent:?} is not live");
        let id = u32::try_from(self.scopes.len())
            .map(ScopeId)
            .unwrap_or_else(|_| panic!("scope arena exceeded {} frames", u32::MAX));
        self.scopes.push(Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        });
        tracing::trace!(scope = id.0, parent = parent.0, "push scope");
        id
    }

    /// Discard `scope` along with any frame pushed after it.
    ///
    /// The root scope is never discarded.
    pub fn pop_scope(&mut self, scope: ScopeId) {
        if scope == ScopeId::ROOT || !self.contains(scope) {
            return;
        }
        debug_assert_eq!(
            scope.index().checked_add(1),
            Some(self.scopes.len()),
            "scopes must be popped in LIFO order"
        );
        self.scopes.truncate(scope.index());
        tracing::trace!(scope = scope.0, "pop scope");
    }

    /// Look up `name`, walking from `scope` out to the root.
    ///
    /// Returns `None` if no scope in the chain binds the name.
    pub fn get(&self, scope: ScopeId, name: Name) -> Option<Value<'a>> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = self.scopes.get(id.index())?;
            if let Some(value) = frame.bindings.get(&name) {
                return Some(*value);
            }
            current = frame.parent;
        }
        None
    }

    /// Bind `name` in `scope`'s own table, shadowing any ancestor binding.
    pub fn set(&mut self, scope: ScopeId, name: Name, value: Value<'a>) {
        debug_assert!(self.contains(scope), "scope {scope:?} is not live");
        if let Some(frame) = self.scopes.get_mut(scope.index()) {
            frame.bindings.insert(name, value);
        }
    }

    /// Parent of `scope`, `None` for the root.
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes.get(scope.index()).and_then(|frame| frame.parent)
    }

    /// Whether `scope` binds `name` itself, ignoring ancestors.
    pub fn binds_locally(&self, scope: ScopeId, name: Name) -> bool {
        self.scopes
            .get(scope.index())
            .is_some_and(|frame| frame.bindings.contains_key(&name))
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
