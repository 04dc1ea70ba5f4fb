//! Control flow: `if`.

use crate::env::Env;
use crate::string_interner::intern;
use crate::value::Value;

use super::{lassert, lassert_type};

pub fn register(env: &Env) {
    env.put(intern("if"), Value::builtin("if", if_builtin));
}

fn if_builtin(env: &Env, args: Vec<Value>) -> Value {
    lassert!(args.len() == 3, "function 'if' passed {} arguments, expected 3", args.len());
    lassert_type!("if", args, 0, Value::Integer);
    lassert_type!("if", args, 1, Value::QExpr);
    lassert_type!("if", args, 2, Value::QExpr);

    let Value::Integer(cond) = args[0] else { unreachable!() };
    let branch = if cond != 0 { &args[1] } else { &args[2] };
    let children = match branch {
        Value::QExpr(children) => children.clone(),
        _ => unreachable!(),
    };
    crate::eval::eval(env, Value::SExpr(children))
}
