//! IO, error construction, file loading, and process exit.

use crate::env::Env;
use crate::string_interner::intern;
use crate::value::Value;

use super::{lassert, lassert_type};

pub fn register(env: &Env) {
    env.put(intern("print"), Value::builtin("print", print));
    env.put(intern("error"), Value::builtin("error", error));
    env.put(intern("load"), Value::builtin("load", load));
    env.put(intern("exit"), Value::builtin("exit", exit));
}

fn print(_env: &Env, args: Vec<Value>) -> Value {
    let rendered: Vec<String> = args.iter().map(Value::to_string).collect();
    println!("{}", rendered.join(" "));
    Value::SExpr(Vec::new())
}

fn error(_env: &Env, args: Vec<Value>) -> Value {
    lassert!(args.len() == 1, "function 'error' passed {} arguments, expected 1", args.len());
    lassert_type!("error", args, 0, Value::String);
    let Value::String(message) = &args[0] else {
        unreachable!()
    };
    Value::error(message.clone())
}

fn load(env: &Env, args: Vec<Value>) -> Value {
    lassert!(args.len() == 1, "function 'load' passed {} arguments, expected 1", args.len());
    lassert_type!("load", args, 0, Value::String);
    let Value::String(path) = &args[0] else {
        unreachable!()
    };
    crate::driver::load_file(env, path)
}

fn exit(_env: &Env, args: Vec<Value>) -> Value {
    let code = match args.first() {
        Some(Value::Integer(n)) => *n as i32,
        Some(_) => return Value::error("function 'exit' passed a non-Number argument".to_string()),
        None => 0,
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Env {
        let e = Env::root();
        crate::builtins::register_all(&e);
        e
    }

    #[test]
    fn error_wraps_a_string_message() {
        let e = env();
        let expr = Value::SExpr(vec![Value::symbol("error"), Value::String("boom".into())]);
        assert!(crate::eval::eval(&e, expr).is_error());
    }

    #[test]
    fn error_rejects_non_string_argument() {
        let e = env();
        let expr = Value::SExpr(vec![Value::symbol("error"), Value::Integer(1)]);
        assert!(crate::eval::eval(&e, expr).is_error());
    }
}
