//! Builtin function registry and the shared assertion macros builtins use
//! to report argument errors, ported from `builtins.c`'s `LASSERT` family.

mod arith;
mod control;
mod io;
mod list;
mod logic;
mod vars;

use crate::env::Env;
use crate::value::Value;

/// Bail out of a builtin with a located-at-the-caller error if `cond` is
/// false. Mirrors the original `LASSERT(args, cond, fmt, ...)` macro.
macro_rules! lassert {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            return Value::error(format!($($arg)*));
        }
    };
}

/// Require `args` to have exactly `n` elements.
macro_rules! lassert_num {
    ($name:expr, $args:expr, $n:expr) => {
        lassert!(
            $args.len() == $n,
            "function '{}' passed {} arguments, expected {}",
            $name,
            $args.len(),
            $n
        );
    };
}

/// Require `$args[$idx]` to be of the given `Value` variant.
macro_rules! lassert_type {
    ($name:expr, $args:expr, $idx:expr, $variant:path) => {
        lassert!(
            matches!($args[$idx], $variant(..)),
            "function '{}' passed incorrect type for argument {}, got {}, expected {}",
            $name,
            $idx,
            $args[$idx].type_name(),
            stringify!($variant)
        );
    };
}

/// Require the `QExpr` at `$args[$idx]` to have at least one element.
macro_rules! lassert_not_empty {
    ($name:expr, $args:expr, $idx:expr) => {
        lassert!(
            matches!(&$args[$idx], Value::QExpr(c) if !c.is_empty()),
            "function '{}' passed {{}} for argument {}",
            $name,
            $idx
        );
    };
}

pub(crate) use lassert;
pub(crate) use lassert_not_empty;
pub(crate) use lassert_num;
pub(crate) use lassert_type;

/// Register every builtin (and the `true`/`false` preloaded bindings) into
/// `env`. Called once to populate the global scope before a program runs.
pub fn register_all(env: &Env) {
    arith::register(env);
    logic::register(env);
    list::register(env);
    vars::register(env);
    control::register(env);
    io::register(env);

    env.put(crate::string_interner::intern("true"), Value::Integer(1));
    env.put(crate::string_interner::intern("false"), Value::Integer(0));
}
