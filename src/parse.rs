//! Parser: consumes a token sequence and yields a single root AST node.
//!
//! Recursive-descent with an explicit depth counter for delimiter matching
//! (spec's stated tie-break: innermost-first). This language has no infix
//! operators, so there is no precedence table to climb — every compound
//! form is exactly `(` or `{` followed by zero or more child forms.

use tracing::debug;

use crate::source::SourceContext;
use crate::tokenize::{Token, TokenKind, TokenizeResult};

#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Number {
        text: String,
        ctx: Option<SourceContext>,
    },
    String {
        text: String,
        ctx: Option<SourceContext>,
    },
    Symbol {
        text: String,
        ctx: Option<SourceContext>,
    },
    SExpr {
        children: Vec<AstNode>,
        ctx: Option<SourceContext>,
    },
    QExpr {
        children: Vec<AstNode>,
        ctx: Option<SourceContext>,
    },
    Error {
        message: String,
        ctx: Option<SourceContext>,
    },
}

impl AstNode {
    pub fn ctx(&self) -> Option<&SourceContext> {
        match self {
            AstNode::Number { ctx, .. }
            | AstNode::String { ctx, .. }
            | AstNode::Symbol { ctx, .. }
            | AstNode::SExpr { ctx, .. }
            | AstNode::QExpr { ctx, .. }
            | AstNode::Error { ctx, .. } => ctx.as_ref(),
        }
    }
}

/// Tokenize and parse `input`, producing the root `SExpr` AST node (or an
/// `Error` node if tokenizing or parsing fails).
pub fn parse(input: &str) -> AstNode {
    match crate::tokenize::tokenize(input) {
        TokenizeResult::Error { ctx, message } => AstNode::Error {
            message,
            ctx: Some(ctx),
        },
        TokenizeResult::Tokens(tokens) => parse_tokens(&tokens),
    }
}

fn parse_tokens(tokens: &[Token]) -> AstNode {
    let root_ctx = tokens.first().map(|t| t.ctx.clone());
    debug!(token_count = tokens.len(), "parsing token sequence");

    let mut pos = 0usize;
    let mut children = Vec::new();

    while pos < tokens.len() {
        match parse_form(tokens, &mut pos) {
            Ok(node) => children.push(node),
            Err(err) => return err,
        }
    }

    AstNode::SExpr {
        children,
        ctx: root_ctx,
    }
}

/// Parse exactly one top-level form starting at `tokens[*pos]`, advancing
/// `*pos` past it. Returns `Err(AstNode::Error)` if this form (or one of its
/// children) is malformed.
fn parse_form(tokens: &[Token], pos: &mut usize) -> Result<AstNode, AstNode> {
    let tok = &tokens[*pos];

    match tok.kind {
        TokenKind::Number => {
            *pos += 1;
            Ok(AstNode::Number {
                text: tok.text.clone(),
                ctx: Some(tok.ctx.clone()),
            })
        }
        TokenKind::String => {
            *pos += 1;
            Ok(AstNode::String {
                text: tok.text.clone(),
                ctx: Some(tok.ctx.clone()),
            })
        }
        TokenKind::Symbol => {
            *pos += 1;
            Ok(AstNode::Symbol {
                text: tok.text.clone(),
                ctx: Some(tok.ctx.clone()),
            })
        }
        TokenKind::ReservedSymbol => match tok.text.as_str() {
            "(" => parse_compound(tokens, pos, "(", ")"),
            "{" => parse_compound(tokens, pos, "{", "}"),
            ")" => Err(AstNode::Error {
                message: "encountered extra ')'".to_string(),
                ctx: Some(tok.ctx.clone()),
            }),
            "}" => Err(AstNode::Error {
                message: "encountered extra '}'".to_string(),
                ctx: Some(tok.ctx.clone()),
            }),
            other => unreachable!("unexpected reserved symbol token {other:?}"),
        },
    }
}

/// Parse a compound form opened by `open` at `tokens[*pos]`, consuming
/// tokens up to and including the matching `close` via a single depth
/// counter (standard innermost-first matching).
fn parse_compound(
    tokens: &[Token],
    pos: &mut usize,
    open: &str,
    close: &str,
) -> Result<AstNode, AstNode> {
    let open_tok = &tokens[*pos];
    let ctx = Some(open_tok.ctx.clone());
    *pos += 1;

    let mut children = Vec::new();
    let mut last_ctx = ctx.clone();

    loop {
        if *pos >= tokens.len() {
            let message = if close == ")" {
                "missing s-expression closing brace, expected ')'".to_string()
            } else {
                "missing s-expression closing brace, expected '}'".to_string()
            };
            return Err(AstNode::Error {
                message,
                ctx: last_ctx,
            });
        }

        let tok = &tokens[*pos];

        if tok.kind == TokenKind::ReservedSymbol && tok.text == close {
            *pos += 1;
            break;
        }

        if tok.kind == TokenKind::ReservedSymbol && (tok.text == ")" || tok.text == "}") {
            // A closer that doesn't match this form's opener: still an
            // "extra closer" at this point in the scan.
            let message = format!("encountered extra '{}'", tok.text);
            return Err(AstNode::Error {
                message,
                ctx: Some(tok.ctx.clone()),
            });
        }

        last_ctx = Some(tok.ctx.clone());
        match parse_form(tokens, pos) {
            Ok(node) => {
                last_ctx = node.ctx().cloned();
                children.push(node);
            }
            Err(err) => return Err(err),
        }
    }

    if open == "(" {
        Ok(AstNode::SExpr { children, ctx })
    } else {
        Ok(AstNode::QExpr { children, ctx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sexpr_children(node: &AstNode) -> &[AstNode] {
        match node {
            AstNode::SExpr { children, .. } => children,
            other => panic!("expected root SExpr, got {other:?}"),
        }
    }

    #[test]
    fn parses_simple_call() {
        let root = parse("(+ 1 2 3)");
        let top = assert_sexpr_children(&root);
        assert_eq!(top.len(), 1);
        match &top[0] {
            AstNode::SExpr { children, .. } => {
                assert_eq!(children.len(), 4);
                assert!(matches!(&children[0], AstNode::Symbol { text, .. } if text == "+"));
            }
            other => panic!("expected nested SExpr, got {other:?}"),
        }
    }

    #[test]
    fn parses_qexpr() {
        let root = parse("{1 2 3}");
        let top = assert_sexpr_children(&root);
        assert!(matches!(&top[0], AstNode::QExpr { children, .. } if children.len() == 3));
    }

    #[test]
    fn extra_close_paren_is_error() {
        let root = parse("(+ 1 2))");
        assert!(matches!(root, AstNode::Error { .. }));
    }

    #[test]
    fn missing_close_paren_is_error() {
        match parse("(+ 1 2") {
            AstNode::Error { message, .. } => {
                assert!(message.contains("missing s-expression closing brace"));
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_root() {
        let root = parse("");
        assert!(assert_sexpr_children(&root).is_empty());
    }

    #[test]
    fn nested_parens_match_innermost_first() {
        let root = parse("(+ (* 2 3) 4)");
        let top = assert_sexpr_children(&root);
        match &top[0] {
            AstNode::SExpr { children, .. } => {
                assert!(matches!(&children[1], AstNode::SExpr { children, .. } if children.len() == 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
