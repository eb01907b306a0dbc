//! Canonical type spelling
//!
//! Field types are re-spelled from their tokens the way gofmt prints them,
//! so `map [ string ] int` and `map[string]int` yield the same text and a
//! multi-line `interface { ... }` collapses onto one line.

use crate::lexer::{Token, TokenKind};

/// Render a type from its tokens.
pub fn render_type(tokens: &[Token<'_>]) -> String {
    let tokens = significant(tokens);
    let mut out = String::new();
    for (i, tok) in tokens.iter().enumerate() {
        if i > 0 && needs_space(tokens[i - 1], tok, tokens.get(i + 1).copied()) {
            out.push(' ');
        }
        match tok.kind {
            TokenKind::Semi => out.push(';'),
            _ => out.push_str(tok.text),
        }
    }
    out
}

/// Drop separators gofmt would not print on a single line.
fn significant<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<&'t Token<'a>> {
    let mut out: Vec<&Token<'a>> = Vec::with_capacity(tokens.len());
    for (i, tok) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1);
        let closes = next.is_none_or(|n| n.is("}") || n.is(")"));
        let redundant = match tok.kind {
            TokenKind::Semi => {
                closes || out.last().is_none_or(|p| p.is("{") || p.kind == TokenKind::Semi)
            }
            TokenKind::Punct if tok.text == "," => next.is_some_and(|n| n.is(")")),
            _ => false,
        };
        if !redundant {
            out.push(tok);
        }
    }
    out
}

fn needs_space(prev: &Token<'_>, next: &Token<'_>, after: Option<&Token<'_>>) -> bool {
    if next.kind == TokenKind::Semi {
        return false;
    }
    if next.kind == TokenKind::Punct && matches!(next.text, "," | ")" | "]" | ".") {
        return false;
    }
    if next.is("}") {
        return !prev.is("{");
    }
    if prev.kind == TokenKind::Punct && matches!(prev.text, "(" | "[" | "]" | "." | "*" | "..." | "&" | "~") {
        return false;
    }
    if prev.is("{") || prev.is(",") || prev.kind == TokenKind::Semi {
        return true;
    }
    if prev.is("<-") {
        return !next.is("chan");
    }
    if prev.kind == TokenKind::Ident {
        match prev.text {
            "func" => return !next.is("("),
            "map" => return !next.is("["),
            "struct" | "interface" => return !next.is("{"),
            "chan" => return !next.is("<-"),
            _ => {}
        }
    }
    if next.is("(") {
        return prev.is(")");
    }
    if next.is("[") {
        // `a []int` and `a [4]int` are parameters; `List[int]` is an instantiation
        return after.is_some_and(|t| t.is("]") || t.kind == TokenKind::Number);
    }
    !next.is("{")
}
