//! Command-line entry point: `lispy [FILES...]`.
//!
//! With no files, starts an interactive REPL. With one or more files, loads
//! and evaluates each in order, then exits.

use clap::Parser;

use lispy::{diagnostics, driver, global_env};

#[derive(Parser)]
#[command(name = "lispy", version, about = "A small Lisp-family interpreter")]
struct Cli {
    /// Source files to load and evaluate. If omitted, starts a REPL.
    files: Vec<String>,

    /// Suppress the REPL's startup banner.
    #[arg(long)]
    quiet: bool,
}

fn main() {
    diagnostics::init();
    let cli = Cli::parse();
    let env = global_env();

    if cli.files.is_empty() {
        driver::run_repl(&env, !cli.quiet);
    } else {
        for path in &cli.files {
            driver::load_file(&env, path);
        }
    }
}
