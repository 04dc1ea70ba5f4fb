//! The evaluator: `eval` walks a `Value` tree, `call` applies a function to
//! arguments (including partial application and variadic binding).

use std::collections::VecDeque;
use std::rc::Rc;

use crate::env::Env;
use crate::string_interner;
use crate::value::{FunctionKind, LispFunction, Value};

/// Evaluate `value` in `env`.
///
/// Only `Symbol` and `SExpr` nodes do any work: everything else (numbers,
/// strings, quoted expressions, functions, and errors already in flight)
/// evaluates to itself.
pub fn eval(env: &Env, value: Value) -> Value {
    match value {
        Value::Symbol(sym) => env.get(sym).unwrap_or_else(|| Value::error(unbound_symbol_message(sym))),
        Value::SExpr(children) => eval_sexpr(env, children),
        other => other,
    }
}

/// Build the "unbound symbol" error, appending a "did you mean" suggestion
/// when a builtin name is within edit distance 2 of what was typed — a
/// typo'd `(fnu {...})` should point a user at `fun`, not leave them
/// guessing.
fn unbound_symbol_message(sym: crate::string_interner::InternedSymbol) -> String {
    let name = string_interner::resolve(sym);
    let suggestion = string_interner::builtin_names()
        .iter()
        .copied()
        .map(|candidate| (candidate, edit_distance::edit_distance(&name, candidate)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate);

    match suggestion {
        Some(candidate) => format!("Unbound Symbol '{name}', did you mean '{candidate}'?"),
        None => format!("Unbound Symbol '{name}'"),
    }
}

fn eval_sexpr(env: &Env, children: Vec<Value>) -> Value {
    let mut evaluated = Vec::with_capacity(children.len());
    for child in children {
        let result = eval(env, child);
        if result.is_error() {
            return result;
        }
        evaluated.push(result);
    }

    match evaluated.len() {
        0 => Value::SExpr(Vec::new()),
        1 => evaluated.into_iter().next().unwrap(),
        _ => {
            let mut iter = evaluated.into_iter();
            let head = iter.next().unwrap();
            let args: Vec<Value> = iter.collect();
            match head {
                Value::Function(func) => call(env, &func, args),
                other => Value::error(format!(
                    "S-Expression starts with non-function of type {}",
                    other.type_name()
                )),
            }
        }
    }
}

/// Apply `func` to `args`.
///
/// Builtins always execute immediately (their own arity checks live in
/// `builtins/`). User-defined functions bind one argument per formal into a
/// fresh child of the closure environment (never the closure environment
/// itself — it is shared by every invocation of this same function value,
/// including recursive ones in flight up the Rust call stack, so writing
/// into it directly would corrupt sibling calls). A literal `&` in the
/// formals list is not resolved until this binding loop runs, exactly as a
/// malformed placement only surfaces once the function is actually called.
/// Supplying fewer arguments than formals curries: the bound prefix lives in
/// `local`, and a function over the remaining formals is returned instead of
/// evaluating the body.
pub fn call(caller_env: &Env, func: &Rc<LispFunction>, args: Vec<Value>) -> Value {
    match &func.kind {
        FunctionKind::Builtin { func: native, .. } => native(caller_env, args),
        FunctionKind::UserDefined { formals, body, env } => {
            let given = args.len();
            let total = formals.len();
            let amp = string_interner::intern("&");

            let local = env.child();
            let mut remaining: VecDeque<_> = formals.iter().copied().collect();
            let mut args = args.into_iter();

            while let Some(value) = args.next() {
                let Some(sym) = remaining.pop_front() else {
                    return Value::error(format!(
                        "Function passed too many arguments. Got {given}, Expected {total}."
                    ));
                };

                if sym == amp {
                    if remaining.len() != 1 {
                        return Value::error(
                            "Function format invalid. Symbol '&' not followed by single symbol.".to_string(),
                        );
                    }
                    let rest_sym = remaining.pop_front().unwrap();
                    let mut rest = vec![value];
                    rest.extend(args);
                    local.put(rest_sym, Value::QExpr(rest));
                    remaining.clear();
                    break;
                }

                local.put(sym, value);
            }

            if remaining.front() == Some(&amp) {
                if remaining.len() != 2 {
                    return Value::error(
                        "Function format invalid. Symbol '&' not followed by single symbol.".to_string(),
                    );
                }
                remaining.pop_front();
                let rest_sym = remaining.pop_front().unwrap();
                local.put(rest_sym, Value::QExpr(Vec::new()));
            }

            if !remaining.is_empty() {
                return Value::Function(Rc::new(LispFunction {
                    kind: FunctionKind::UserDefined {
                        formals: remaining.into_iter().collect(),
                        body: body.clone(),
                        env: local,
                    },
                }));
            }

            let body_sexpr = match body.as_ref() {
                Value::QExpr(items) => Value::SExpr(items.clone()),
                other => other.clone(),
            };
            eval(&local, body_sexpr)
        }
    }
}
