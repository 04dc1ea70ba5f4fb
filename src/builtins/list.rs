//! List (`QExpr`) operations: `list head tail join eval cons len init`.

use crate::env::Env;
use crate::string_interner::intern;
use crate::value::Value;

use super::{lassert, lassert_not_empty, lassert_num, lassert_type};

pub fn register(env: &Env) {
    env.put(intern("list"), Value::builtin("list", |_, args| Value::QExpr(args)));
    env.put(intern("head"), Value::builtin("head", head));
    env.put(intern("tail"), Value::builtin("tail", tail));
    env.put(intern("join"), Value::builtin("join", join));
    env.put(intern("eval"), Value::builtin("eval", eval_builtin));
    env.put(intern("cons"), Value::builtin("cons", cons));
    env.put(intern("len"), Value::builtin("len", len));
    env.put(intern("init"), Value::builtin("init", init));
}

fn head(_env: &Env, args: Vec<Value>) -> Value {
    lassert_num!("head", args, 1);
    lassert_type!("head", args, 0, Value::QExpr);
    lassert_not_empty!("head", args, 0);
    match &args[0] {
        Value::QExpr(children) => Value::QExpr(vec![children[0].clone()]),
        _ => unreachable!(),
    }
}

fn tail(_env: &Env, args: Vec<Value>) -> Value {
    lassert_num!("tail", args, 1);
    lassert_type!("tail", args, 0, Value::QExpr);
    lassert_not_empty!("tail", args, 0);
    match &args[0] {
        Value::QExpr(children) => Value::QExpr(children[1..].to_vec()),
        _ => unreachable!(),
    }
}

fn init(_env: &Env, args: Vec<Value>) -> Value {
    lassert_num!("init", args, 1);
    lassert_type!("init", args, 0, Value::QExpr);
    lassert_not_empty!("init", args, 0);
    match &args[0] {
        Value::QExpr(children) => Value::QExpr(children[..children.len() - 1].to_vec()),
        _ => unreachable!(),
    }
}

fn len(_env: &Env, args: Vec<Value>) -> Value {
    lassert_num!("len", args, 1);
    lassert_type!("len", args, 0, Value::QExpr);
    match &args[0] {
        Value::QExpr(children) => Value::Integer(children.len() as i64),
        _ => unreachable!(),
    }
}

fn join(_env: &Env, args: Vec<Value>) -> Value {
    let mut out = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        match arg {
            Value::QExpr(children) => out.extend(children.iter().cloned()),
            other => {
                return Value::error(format!(
                    "function 'join' passed incorrect type for argument {i}, got {}",
                    other.type_name()
                ));
            }
        }
    }
    Value::QExpr(out)
}

fn cons(_env: &Env, args: Vec<Value>) -> Value {
    lassert_num!("cons", args, 2);
    lassert_type!("cons", args, 1, Value::QExpr);
    match &args[1] {
        Value::QExpr(children) => {
            let mut out = Vec::with_capacity(children.len() + 1);
            out.push(args[0].clone());
            out.extend(children.iter().cloned());
            Value::QExpr(out)
        }
        _ => unreachable!(),
    }
}

fn eval_builtin(env: &Env, args: Vec<Value>) -> Value {
    lassert_num!("eval", args, 1);
    lassert_type!("eval", args, 0, Value::QExpr);
    let children = match args.into_iter().next().unwrap() {
        Value::QExpr(children) => children,
        _ => unreachable!(),
    };
    crate::eval::eval(env, Value::SExpr(children))
}
