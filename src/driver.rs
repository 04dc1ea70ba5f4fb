//! The two ways a program runs: loading a file (and exiting), or dropping
//! into an interactive REPL. Mirrors `repl.c`'s top-level loop, swapping its
//! raw `readline`/`add_history` calls for `rustyline`.

use std::fs;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{info, warn};

use crate::env::Env;
use crate::error::LoadError;
use crate::eval::eval;
use crate::parse::{parse, AstNode};
use crate::source::render_error;
use crate::value::{read, Value};

const HISTORY_FILE: &str = ".lispy_history";

/// Read `path`, parse it as a sequence of top-level forms, and evaluate each
/// in turn. Errors encountered while evaluating a form are printed and do
/// not stop the remaining forms from running (matching `builtin_load`'s
/// behaviour); a failure to read or decode the file itself is a host-level
/// [`LoadError`], reported as a `Value::Error` so callers of the `load`
/// builtin see a single uniform failure shape.
pub fn load_file(env: &Env, path: &str) -> Value {
    match read_source(path) {
        Ok(source) => {
            info!(path, "loaded file");
            run_forms(env, &source);
            Value::SExpr(Vec::new())
        }
        Err(err) => {
            warn!(path, error = %err, "failed to load file");
            Value::error(err.to_string())
        }
    }
}

fn read_source(path: &str) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.into(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|err| LoadError::InvalidUtf8 {
        path: path.into(),
        source: err,
    })
}

fn run_forms(env: &Env, source: &str) {
    let root = parse(source);
    match root {
        AstNode::Error { message, ctx } => {
            eprintln!("{}", render_error(ctx.as_ref(), &message));
        }
        AstNode::SExpr { children, .. } => {
            for child in children {
                let value = read(&child);
                let result = eval(env, value);
                if let Value::Error { message, ctx } = result {
                    eprintln!("{}", render_error(ctx.as_ref(), &message));
                }
            }
        }
        other => {
            let value = read(&other);
            eval(env, value);
        }
    }
}

/// Run an interactive read-eval-print loop against `env` until EOF
/// (Ctrl-D) or an interrupt (Ctrl-C). `banner` controls whether the
/// startup banner is printed (`lispy --quiet` suppresses it).
pub fn run_repl(env: &Env, banner: bool) {
    let mut editor = DefaultEditor::new().expect("failed to initialize line editor");
    let _ = editor.load_history(HISTORY_FILE);

    if banner {
        println!("Lisp version {}", env!("CARGO_PKG_VERSION"));
        println!("Enter exit for closing repl");
    }

    loop {
        match editor.readline("lisp> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                let root = parse(&line);
                match root {
                    AstNode::Error { message, ctx } => {
                        eprintln!("{}", render_error(ctx.as_ref(), &message));
                    }
                    other => {
                        let value = read(&other);
                        let result = eval(env, value);
                        match &result {
                            Value::Error { message, ctx } => {
                                eprintln!("{}", render_error(ctx.as_ref(), message));
                            }
                            _ => println!("{result}"),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                warn!(error = %err, "line editor error");
                break;
            }
        }
    }

    let _ = editor.save_history(HISTORY_FILE);
}
