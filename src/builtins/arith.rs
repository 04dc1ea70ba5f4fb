//! Arithmetic operators: `+ - * / %`, all variadic, `-` also unary negation.

use crate::env::Env;
use crate::string_interner::intern;
use crate::value::Value;

use super::lassert;

pub fn register(env: &Env) {
    env.put(intern("+"), Value::builtin("+", |_, args| fold("+", args, |a, b| Some(a + b))));
    env.put(intern("-"), Value::builtin("-", sub));
    env.put(intern("*"), Value::builtin("*", |_, args| fold("*", args, |a, b| Some(a * b))));
    env.put(intern("/"), Value::builtin("/", |_, args| fold("/", args, |a, b| {
        if b == 0 { None } else { Some(a / b) }
    })));
    env.put(intern("%"), Value::builtin("%", |_, args| fold("%", args, |a, b| {
        if b == 0 { None } else { Some(a % b) }
    })));
}

fn sub(_env: &Env, args: Vec<Value>) -> Value {
    lassert!(!args.is_empty(), "function '-' passed 0 arguments, expected at least 1");
    for (i, a) in args.iter().enumerate() {
        if !matches!(a, Value::Integer(_)) {
            return Value::error(format!(
                "function '-' passed incorrect type for argument {i}, got {}",
                a.type_name()
            ));
        }
    }
    if args.len() == 1 {
        let Value::Integer(n) = args[0] else { unreachable!() };
        return Value::Integer(-n);
    }
    fold("-", args, |a, b| Some(a - b))
}

/// Left-fold a variadic numeric operator over `args[0]..`, short-circuiting
/// on any non-integer argument or on `op` returning `None` (division by
/// zero).
fn fold(name: &str, args: Vec<Value>, op: impl Fn(i64, i64) -> Option<i64>) -> Value {
    if args.is_empty() {
        return Value::error(format!("function '{name}' passed 0 arguments, expected at least 1"));
    }
    for (i, a) in args.iter().enumerate() {
        if !matches!(a, Value::Integer(_)) {
            return Value::error(format!(
                "function '{name}' passed incorrect type for argument {i}, got {}",
                a.type_name()
            ));
        }
    }
    let mut iter = args.into_iter();
    let Value::Integer(mut acc) = iter.next().unwrap() else {
        unreachable!()
    };
    for v in iter {
        let Value::Integer(n) = v else { unreachable!() };
        match op(acc, n) {
            Some(next) => acc = next,
            None => return Value::error("Division By Zero!".to_string()),
        }
    }
    Value::Integer(acc)
}
