//! A small tree-walking interpreter for a Lisp-family language of
//! S-expressions and Q-expressions: tokenizer, recursive-descent parser,
//! value model, lexically-scoped environments, an evaluator with closures
//! and partial application, and a builtin standard library.
//!
//! # Pipeline
//!
//! Stage                | Result           | Entry point
//! ----------------------|------------------|--------------------------
//! Tokenize              | [`tokenize::TokenizeResult`] | [`tokenize::tokenize()`]
//! Parse                 | [`parse::AstNode`]           | [`parse::parse()`]
//! Read into values      | [`value::Value`]             | [`value::read()`]
//! Evaluate              | [`value::Value`]              | [`eval::eval()`]
//!
//! [`driver::load_file`] and [`driver::run_repl`] drive the whole pipeline
//! end to end, the way `src/bin/lispy.rs` does for the CLI.

pub mod builtins;
pub mod diagnostics;
pub mod driver;
pub mod env;
pub mod error;
pub mod eval;
mod newtypes;
pub mod parse;
pub mod source;
pub mod string_interner;
pub mod tokenize;
pub mod value;

use env::Env;

/// Build the global environment with every builtin and the `true`/`false`
/// bindings preloaded — the starting point for both the REPL and file-load
/// entry points.
pub fn global_env() -> Env {
    let env = Env::root();
    builtins::register_all(&env);
    env
}
