//! Variable and function definition: `def`, `=`, `lambda`, `fun`.

use std::rc::Rc;

use crate::env::Env;
use crate::string_interner::{intern, InternedSymbol};
use crate::value::{FunctionKind, LispFunction, Value};

use super::{lassert, lassert_type};

pub fn register(env: &Env) {
    env.put(intern("def"), Value::builtin("def", |e, a| define("def", e, a, |e, s, v| e.def(s, v))));
    env.put(intern("="), Value::builtin("=", |e, a| define("=", e, a, |e, s, v| e.put(s, v))));
    env.put(intern("lambda"), Value::builtin("lambda", lambda));
    env.put(intern("fun"), Value::builtin("fun", fun));
}

/// Shared implementation for `def` (binds in the global scope) and `=`
/// (binds in the current scope): first argument is a `QExpr` of symbols,
/// the rest are the values to bind to them positionally.
fn define(name: &str, env: &Env, args: Vec<Value>, bind: impl Fn(&Env, InternedSymbol, Value)) -> Value {
    lassert!(!args.is_empty(), "function '{name}' passed 0 arguments, expected at least 1");
    lassert_type!(name, args, 0, Value::QExpr);
    let symbols = match &args[0] {
        Value::QExpr(children) => children,
        _ => unreachable!(),
    };
    for s in symbols {
        lassert!(matches!(s, Value::Symbol(_)), "function '{name}' cannot define a non-symbol");
    }
    lassert!(
        symbols.len() == args.len() - 1,
        "function '{name}' passed {} symbols for {} values",
        symbols.len(),
        args.len() - 1
    );

    for (sym, value) in symbols.iter().zip(args[1..].iter()) {
        let Value::Symbol(s) = sym else { unreachable!() };
        bind(env, *s, value.clone());
    }
    Value::SExpr(Vec::new())
}

fn lambda(env: &Env, args: Vec<Value>) -> Value {
    lassert!(args.len() == 2, "function 'lambda' passed {} arguments, expected 2", args.len());
    lassert_type!("lambda", args, 0, Value::QExpr);
    lassert_type!("lambda", args, 1, Value::QExpr);
    let formals = match &args[0] {
        Value::QExpr(children) => children.clone(),
        _ => unreachable!(),
    };
    build_lambda(env, &formals, args[1].clone())
}

/// Build the closure, capturing `env` as a fresh child scope. The formals
/// list is stored exactly as written, literal `&` included: whether it marks
/// a valid variadic tail is not decided here but lazily, by
/// [`crate::eval::call`]'s binding loop, the first time this function is
/// actually called — a malformed `&` placement is still a constructible
/// value.
fn build_lambda(env: &Env, formals: &[Value], body: Value) -> Value {
    let mut names = Vec::with_capacity(formals.len());
    for formal in formals {
        let Value::Symbol(sym) = formal else {
            return Value::error("cannot define non-symbol in formals list".to_string());
        };
        names.push(*sym);
    }

    Value::Function(Rc::new(LispFunction {
        kind: FunctionKind::UserDefined {
            formals: names,
            body: Rc::new(body),
            env: env.child(),
        },
    }))
}

fn fun(env: &Env, args: Vec<Value>) -> Value {
    lassert!(args.len() == 2, "function 'fun' passed {} arguments, expected 2", args.len());
    lassert_type!("fun", args, 0, Value::QExpr);
    lassert_type!("fun", args, 1, Value::QExpr);
    let header = match &args[0] {
        Value::QExpr(children) => children,
        _ => unreachable!(),
    };
    lassert!(!header.is_empty(), "function 'fun' passed an empty name/formals list");
    let Value::Symbol(name) = &header[0] else {
        return Value::error("function 'fun' expected a symbol for the function name".to_string());
    };
    let formals = &header[1..];
    let built = build_lambda(env, formals, args[1].clone());
    if built.is_error() {
        return built;
    }
    env.def(*name, built);
    Value::SExpr(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::eval;

    fn env() -> Env {
        let e = Env::root();
        crate::builtins::register_all(&e);
        e
    }

    #[test]
    fn def_binds_globally() {
        let e = env();
        let expr = Value::SExpr(vec![
            Value::symbol("def"),
            Value::QExpr(vec![Value::symbol("x")]),
            Value::Integer(5),
        ]);
        eval(&e, expr);
        let child = e.child();
        assert!(matches!(child.get(intern("x")), Some(Value::Integer(5))));
    }

    #[test]
    fn fun_defines_a_callable_function() {
        let e = env();
        let def_fn = Value::SExpr(vec![
            Value::symbol("fun"),
            Value::QExpr(vec![Value::symbol("square"), Value::symbol("x")]),
            Value::QExpr(vec![Value::symbol("*"), Value::symbol("x"), Value::symbol("x")]),
        ]);
        eval(&e, def_fn);
        let call = Value::SExpr(vec![Value::symbol("square"), Value::Integer(4)]);
        assert!(matches!(eval(&e, call), Value::Integer(16)));
    }

    #[test]
    fn malformed_ampersand_placement_is_only_an_error_when_called() {
        let e = env();
        let make = Value::SExpr(vec![
            Value::symbol("lambda"),
            Value::QExpr(vec![Value::symbol("a"), Value::symbol("&"), Value::symbol("b"), Value::symbol("c")]),
            Value::QExpr(vec![Value::symbol("a")]),
        ]);
        let f = eval(&e, make);
        let func = match &f {
            Value::Function(func) => func.clone(),
            other => panic!("expected a constructible function value, got {other}"),
        };
        assert!(!f.is_error());
        let result = crate::eval::call(&e, &func, vec![Value::Integer(1), Value::Integer(2)]);
        match result {
            Value::Error { message, .. } => {
                assert_eq!(&*message, "Function format invalid. Symbol '&' not followed by single symbol.");
            }
            other => panic!("expected error, got {other}"),
        }
    }

    #[test]
    fn lambda_supports_variadic_tail() {
        let e = env();
        let make = Value::SExpr(vec![
            Value::symbol("lambda"),
            Value::QExpr(vec![Value::symbol("a"), Value::symbol("&"), Value::symbol("rest")]),
            Value::QExpr(vec![Value::symbol("rest")]),
        ]);
        let f = eval(&e, make);
        match f {
            Value::Function(func) => {
                let result = crate::eval::call(&e, &func, vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
                match result {
                    Value::QExpr(children) => assert_eq!(children.len(), 2),
                    other => panic!("unexpected {other}"),
                }
            }
            other => panic!("unexpected {other}"),
        }
    }
}
