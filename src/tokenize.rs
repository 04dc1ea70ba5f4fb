//! Tokenizer: converts a source string into an ordered token sequence.
//!
//! Ported from the reference C tokenizer's row-at-a-time scanning strategy
//! (split on newlines up front, then scan each row left to right) but
//! following this spec's own lexical-class ordering and symbol-character
//! exclusion set rather than the original's slightly looser `is_symbol`.

use std::rc::Rc;

use tracing::trace;

use crate::source::SourceContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    String,
    Symbol,
    ReservedSymbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub ctx: SourceContext,
}

/// Either the full ordered token sequence, or the single located error that
/// stopped tokenization.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenizeResult {
    Tokens(Vec<Token>),
    Error { ctx: SourceContext, message: String },
}

const RESERVED_CHARS: &[char] = &['(', ')', '{', '}'];

fn is_reserved(c: char) -> bool {
    RESERVED_CHARS.contains(&c)
}

fn is_symbol_char(c: char) -> bool {
    !c.is_whitespace() && !is_reserved(c) && c != '"' && c != ';' && c != '\\'
}

/// Tokenize an entire source string.
pub fn tokenize(input: &str) -> TokenizeResult {
    let mut tokens = Vec::new();

    for (row_idx, row) in input.split('\n').enumerate() {
        let row_no = (row_idx + 1) as u32;
        trace!(row_no, row, "tokenizing row");
        if let Err((col, message)) = tokenize_row(row, row_no, &mut tokens) {
            return TokenizeResult::Error {
                ctx: SourceContext::new(row_no, col, row),
                message,
            };
        }
    }

    TokenizeResult::Tokens(tokens)
}

/// Scan a single row (no embedded newline), appending tokens into `out`.
///
/// Returns `Err((column, message))` on the first lexical error, matching
/// `tokenizer.c`'s early-return-on-error behaviour.
fn tokenize_row(row: &str, row_no: u32, out: &mut Vec<Token>) -> Result<(), (u32, String)> {
    let chars: Vec<char> = row.chars().collect();
    let trace_line: Rc<str> = Rc::from(row);
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];

        if c == ' ' || c == '\t' {
            i += 1;
        } else if c == ';' {
            // Comment runs to end of line; discard the remainder of the row.
            break;
        } else if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(make_token(
                TokenKind::Number,
                &chars,
                start,
                i,
                row_no,
                start,
                trace_line.clone(),
            ));
        } else if c == '"' {
            let start = i + 1;
            let mut j = start;
            let mut escaped = false;
            loop {
                if j >= chars.len() {
                    return Err((
                        (j + 1) as u32,
                        "missing string delimiter, expected '\"'".to_string(),
                    ));
                }
                if chars[j] == '"' && !escaped {
                    break;
                }
                escaped = chars[j] == '\\' && !escaped;
                j += 1;
            }
            out.push(make_token(
                TokenKind::String,
                &chars,
                start,
                j,
                row_no,
                start,
                trace_line.clone(),
            ));
            i = j + 1;
        } else if is_reserved(c) {
            out.push(make_token(
                TokenKind::ReservedSymbol,
                &chars,
                i,
                i + 1,
                row_no,
                i,
                trace_line.clone(),
            ));
            i += 1;
        } else if is_symbol_char(c) {
            let start = i;
            while i < chars.len() && is_symbol_char(chars[i]) {
                i += 1;
            }
            out.push(make_token(
                TokenKind::Symbol,
                &chars,
                start,
                i,
                row_no,
                start,
                trace_line.clone(),
            ));
        } else {
            return Err(((i + 1) as u32, "Failed to tokenize".to_string()));
        }
    }

    Ok(())
}

fn make_token(
    kind: TokenKind,
    chars: &[char],
    start: usize,
    end: usize,
    row_no: u32,
    col_start: usize,
    trace_line: Rc<str>,
) -> Token {
    let text: String = chars[start..end].iter().collect();
    let ctx = SourceContext::new(row_no, (col_start + 1) as u32, trace_line);
    Token { kind, text, ctx }
}
