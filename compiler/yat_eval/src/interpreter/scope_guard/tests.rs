use super::*;
use crate::Value;
use pretty_assertions::assert_eq;
use yat_ir::StringInterner;

#[test]
fn test_guard_pops_on_drop() {
    let interner = StringInterner::new();
    let mut interpreter = Interpreter::new(&interner);
    let root = interpreter.root();

    {
        let scoped = interpreter.scoped(root);
        assert_eq!(scoped.env().depth(), 2);
    }
    assert_eq!(interpreter.env().depth(), 1);
}

#[test]
fn test_with_bindings_scopes_values() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut interpreter = Interpreter::new(&interner);
    let root = interpreter.root();

    let seen = interpreter.with_bindings(root, [(x, Value::Number(7))], |scoped, scope| {
        scoped.env().get(scope, x)
    });

    assert_eq!(seen, Some(Value::Number(7)));
    assert_eq!(interpreter.env().get(root, x), None);
}

#[test]
fn test_guard_pops_on_early_return() {
    fn failing(interpreter: &mut Interpreter<'_>, root: ScopeId) -> Result<(), ()> {
        let _scoped = interpreter.scoped(root);
        Err(())
    }

    let interner = StringInterner::new();
    let mut interpreter = Interpreter::new(&interner);
    let root = interpreter.root();

    assert!(failing(&mut interpreter, root).is_err());
    assert_eq!(interpreter.env().depth(), 1);
}
