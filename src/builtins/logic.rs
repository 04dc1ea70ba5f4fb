//! Ordering, equality, and boolean operators.
//!
//! `<` and `>` use their mathematically correct meaning here — the C this
//! language was distilled from registers them swapped
//! (`lenv_add_builtin(e, "<", builtin_gt)` in `builtins.c`), which reads as
//! an authoring slip rather than an intentional design choice, so it is not
//! carried forward.

use crate::env::Env;
use crate::string_interner::intern;
use crate::value::{FunctionKind, Value};

use super::lassert;

pub fn register(env: &Env) {
    env.put(intern(">"), Value::builtin(">", |_, a| ordering(">", a, |x, y| x > y)));
    env.put(intern("<"), Value::builtin("<", |_, a| ordering("<", a, |x, y| x < y)));
    env.put(intern(">="), Value::builtin(">=", |_, a| ordering(">=", a, |x, y| x >= y)));
    env.put(intern("<="), Value::builtin("<=", |_, a| ordering("<=", a, |x, y| x <= y)));
    env.put(intern("=="), Value::builtin("==", equality_builtin(true)));
    env.put(intern("!="), Value::builtin("!=", equality_builtin(false)));
    env.put(intern("&&"), Value::builtin("&&", |_, a| logical("&&", a, |x, y| x != 0 && y != 0)));
    env.put(intern("||"), Value::builtin("||", |_, a| logical("||", a, |x, y| x != 0 || y != 0)));
    env.put(intern("!"), Value::builtin("!", not));
}

fn as_bool(cond: bool) -> Value {
    Value::Integer(if cond { 1 } else { 0 })
}

fn ordering(name: &str, args: Vec<Value>, op: impl Fn(i64, i64) -> bool) -> Value {
    lassert!(args.len() == 2, "function '{name}' passed {} arguments, expected 2", args.len());
    let (Value::Integer(a), Value::Integer(b)) = (&args[0], &args[1]) else {
        return Value::error(format!("function '{name}' passed a non-Number argument"));
    };
    as_bool(op(*a, *b))
}

fn logical(name: &str, args: Vec<Value>, op: impl Fn(i64, i64) -> bool) -> Value {
    lassert!(args.len() == 2, "function '{name}' passed {} arguments, expected 2", args.len());
    let (Value::Integer(a), Value::Integer(b)) = (&args[0], &args[1]) else {
        return Value::error(format!("function '{name}' passed a non-Number argument"));
    };
    as_bool(op(*a, *b))
}

fn not(_env: &Env, args: Vec<Value>) -> Value {
    lassert!(args.len() == 1, "function '!' passed {} arguments, expected 1", args.len());
    let Value::Integer(a) = &args[0] else {
        return Value::error("function '!' passed a non-Number argument".to_string());
    };
    as_bool(*a == 0)
}

fn equality_builtin(want_equal: bool) -> fn(&Env, Vec<Value>) -> Value {
    if want_equal {
        |_env, args| equality(args, true)
    } else {
        |_env, args| equality(args, false)
    }
}

fn equality(args: Vec<Value>, want_equal: bool) -> Value {
    let name = if want_equal { "==" } else { "!=" };
    lassert!(args.len() == 2, "function '{name}' passed {} arguments, expected 2", args.len());
    let eq = values_equal(&args[0], &args[1]);
    as_bool(eq == want_equal)
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Error { message: x, .. }, Value::Error { message: y, .. }) => x == y,
        (Value::SExpr(x), Value::SExpr(y)) | (Value::QExpr(x), Value::QExpr(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(p, q)| values_equal(p, q))
        }
        (Value::Function(x), Value::Function(y)) => match (&x.kind, &y.kind) {
            (FunctionKind::Builtin { name: nx, .. }, FunctionKind::Builtin { name: ny, .. }) => nx == ny,
            (
                FunctionKind::UserDefined { formals: fa, body: ba, .. },
                FunctionKind::UserDefined { formals: fb, body: bb, .. },
            ) => fa == fb && values_equal(ba, bb),
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Env {
        let e = Env::root();
        super::register(&e);
        e
    }

    fn call(env: &Env, name: &str, args: Vec<Value>) -> Value {
        match env.get(intern(name)).unwrap() {
            Value::Function(func) => crate::eval::call(env, &func, args),
            _ => unreachable!(),
        }
    }

    #[test]
    fn less_than_is_mathematically_correct() {
        let e = env();
        assert!(matches!(call(&e, "<", vec![Value::Integer(1), Value::Integer(2)]), Value::Integer(1)));
        assert!(matches!(call(&e, ">", vec![Value::Integer(1), Value::Integer(2)]), Value::Integer(0)));
    }

    #[test]
    fn equality_compares_structurally() {
        let e = env();
        let a = Value::QExpr(vec![Value::Integer(1), Value::Integer(2)]);
        let b = Value::QExpr(vec![Value::Integer(1), Value::Integer(2)]);
        assert!(matches!(call(&e, "==", vec![a, b]), Value::Integer(1)));
    }

    #[test]
    fn logical_and_short_circuits_on_zero() {
        let e = env();
        assert!(matches!(call(&e, "&&", vec![Value::Integer(0), Value::Integer(1)]), Value::Integer(0)));
    }

    #[test]
    fn not_negates_truthiness() {
        let e = env();
        assert!(matches!(call(&e, "!", vec![Value::Integer(0)]), Value::Integer(1)));
    }
}
