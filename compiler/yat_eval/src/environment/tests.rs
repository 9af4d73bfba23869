use super::*;
use pretty_assertions::assert_eq;
use yat_ir::SharedInterner;

#[test]
fn test_scope_set_get() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut env = Environment::new();
    let root = env.root();
    env.set(root, x, Value::Number(42));
    assert_eq!(env.get(root, x), Some(Value::Number(42)));
}

#[test]
fn test_scope_missing() {
    let interner = SharedInterner::default();
    let missing = interner.intern("missing");

    let mut env = Environment::new();
    let child = env.push_scope(env.root());
    assert_eq!(env.get(env.root(), missing), None);
    assert_eq!(env.get(child, missing), None);
}

#[test]
fn test_child_reads_parent() {
    let interner = SharedInterner::default();
    let bar = interner.intern("bar");

    let mut env = Environment::new();
    let root = env.root();
    env.set(root, bar, Value::Number(10));

    let child = env.push_scope(root);
    let grandchild = env.push_scope(child);
    assert_eq!(env.get(child, bar), Some(Value::Number(10)));
    assert_eq!(env.get(grandchild, bar), Some(Value::Number(10)));
}

#[test]
fn test_scope_shadowing() {
    let interner = SharedInterner::default();
    let bar = interner.intern("bar");

    let mut env = Environment::new();
    let root = env.root();
    env.set(root, bar, Value::Number(10));

    let child = env.push_scope(root);
    assert_eq!(env.get(child, bar), Some(Value::Number(10)));

    env.set(child, bar, Value::Number(20));
    assert_eq!(env.get(child, bar), Some(Value::Number(20)));
    assert_eq!(env.get(root, bar), Some(Value::Number(10)));
    assert!(env.binds_locally(child, bar));

    env.pop_scope(child);
    assert_eq!(env.get(root, bar), Some(Value::Number(10)));
}

#[test]
fn test_set_never_touches_ancestor() {
    let interner = SharedInterner::default();
    let y = interner.intern("y");

    let mut env = Environment::new();
    let root = env.root();
    let child = env.push_scope(root);
    env.set(child, y, Value::Number(1));

    assert!(!env.binds_locally(root, y));
    assert_eq!(env.get(root, y), None);
}

#[test]
fn test_push_pop_depth() {
    let mut env = Environment::new();
    assert_eq!(env.depth(), 1);

    let a = env.push_scope(env.root());
    let b = env.push_scope(a);
    assert_eq!(env.depth(), 3);
    assert_eq!(env.parent(b), Some(a));
    assert_eq!(env.parent(a), Some(ScopeId::ROOT));
    assert_eq!(env.parent(ScopeId::ROOT), None);

    env.pop_scope(b);
    env.pop_scope(a);
    assert_eq!(env.depth(), 1);
    assert!(!env.contains(a));
}

#[test]
fn test_root_is_never_popped() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.set(ScopeId::ROOT, x, Value::Number(1));
    env.pop_scope(ScopeId::ROOT);

    assert_eq!(env.depth(), 1);
    assert_eq!(env.get(ScopeId::ROOT, x), Some(Value::Number(1)));
}

#[test]
fn test_sibling_scopes_are_isolated() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut env = Environment::new();
    let first = env.push_scope(env.root());
    env.set(first, x, Value::Number(1));
    env.pop_scope(first);

    // A later call reuses the slot but starts with an empty table.
    let second = env.push_scope(env.root());
    assert_eq!(env.get(second, x), None);
}
