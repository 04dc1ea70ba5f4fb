//! Source locations attached to tokens, AST nodes, and runtime values.

use std::fmt;
use std::rc::Rc;

use crate::newtypes::{ColumnNumber, LineNumber};

/// The row, column, and original source line text for a token, AST node, or
/// runtime value.
///
/// `trace` is shared via `Rc<str>` because every token on the same source
/// line carries an identical copy of that line's text; cloning a context is
/// meant to be cheap, matching the "copy freely" invariant in the data
/// model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    row: LineNumber,
    column: ColumnNumber,
    trace: Rc<str>,
}

impl SourceContext {
    pub fn new(row: u32, column: u32, trace: impl Into<Rc<str>>) -> Self {
        SourceContext {
            row: LineNumber::new(row).expect("row is 1-based"),
            column: ColumnNumber::new(column).expect("column is 1-based"),
            trace: trace.into(),
        }
    }

    pub fn row(&self) -> u32 {
        self.row.get()
    }

    pub fn column(&self) -> u32 {
        self.column.get()
    }

    pub fn trace(&self) -> &str {
        &self.trace
    }
}

impl fmt::Display for SourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} column {}", self.row(), self.column())
    }
}

/// Renders the diagnostic block specified in §6 "Error presentation":
///
/// ```text
/// Error on row R column C: <message>
/// Stack Trace:
/// <source line>
/// ```
pub fn render_error(ctx: Option<&SourceContext>, message: &str) -> String {
    match ctx {
        Some(ctx) => format!(
            "Error on row {} column {}: {}\nStack Trace:\n{}",
            ctx.row(),
            ctx.column(),
            message,
            ctx.trace()
        ),
        None => format!("Error: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_column_are_one_based() {
        let ctx = SourceContext::new(1, 1, "(+ 1 2)");
        assert_eq!(ctx.row(), 1);
        assert_eq!(ctx.column(), 1);
    }

    #[test]
    fn clone_is_cheap_and_equal() {
        let ctx = SourceContext::new(3, 7, "  (foo bar)");
        let copy = ctx.clone();
        assert_eq!(ctx, copy);
    }

    #[test]
    fn render_error_includes_location_and_trace() {
        let ctx = SourceContext::new(2, 5, "(+ 1 2");
        let rendered = render_error(Some(&ctx), "missing s-expression closing brace, expected ')'");
        assert_eq!(
            rendered,
            "Error on row 2 column 5: missing s-expression closing brace, expected ')'\nStack Trace:\n(+ 1 2"
        );
    }

    #[test]
    fn render_error_without_context() {
        let rendered = render_error(None, "boom");
        assert_eq!(rendered, "Error: boom");
    }
}
