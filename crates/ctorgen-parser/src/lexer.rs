//! Go tokenizer
//!
//! Produces the token stream the declaration parser walks. Comments are
//! dropped and semicolons are inserted at line ends following the Go
//! specification, so statements and field declarations always end in a
//! [`TokenKind::Semi`].

use ctorgen_core::{CtorgenError, CtorgenResult};

/// Token category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword
    Ident,
    Number,
    Rune,
    /// Interpreted (`"..."`) or raw (`` `...` ``) string literal
    String,
    /// Operator or delimiter
    Punct,
    /// Explicit `;` or one inserted at a line end
    Semi,
}

/// A token borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Source text of the token; `"\n"` for inserted semicolons
    pub text: &'a str,
    /// 1-based line the token starts on
    pub line: usize,
}

impl Token<'_> {
    /// Whether this is the given punctuation or keyword
    pub fn is(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Punct | TokenKind::Ident) && self.text == text
    }

    /// Identifier, literal: anything that reads as a word
    pub fn is_word(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Ident | TokenKind::Number | TokenKind::Rune | TokenKind::String
        )
    }
}

/// Operators, longest first so that matching is greedy
const PUNCTUATION: [&str; 47] = [
    "<<=", ">>=", "&^=", "...", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=", "<<",
    ">>", "&^", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+", "-", "*", "/", "%", "&", "|",
    "^", "<", ">", "=", "!", "(", ")", "[", "]", "{", "}", ",", ".", ":", "~",
];

/// Keywords after which a line end inserts a semicolon
const TERMINATING_KEYWORDS: [&str; 4] = ["break", "continue", "fallthrough", "return"];

/// Tokenize Go source text.
pub fn tokenize(source: &str) -> CtorgenResult<Vec<Token<'_>>> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> CtorgenResult<Vec<Token<'a>>> {
        while let Some(c) = self.peek() {
            match c {
                '\n' => {
                    self.newline();
                    self.pos += 1;
                }
                c if c.is_whitespace() => self.pos += c.len_utf8(),
                '/' if self.rest().starts_with("//") => self.line_comment(),
                '/' if self.rest().starts_with("/*") => self.block_comment()?,
                '"' => self.interpreted_string()?,
                '`' => self.raw_string()?,
                '\'' => self.rune()?,
                c if c.is_ascii_digit() => self.number(),
                '.' if self.rest()[1..].starts_with(|c: char| c.is_ascii_digit()) => self.number(),
                c if c.is_alphabetic() || c == '_' => self.ident(),
                ';' => {
                    self.push(TokenKind::Semi, self.pos, self.pos + 1);
                }
                _ => self.punct()?,
            }
        }
        self.newline();
        Ok(self.tokens)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token {
            kind,
            text: &self.source[start..end],
            line: self.line,
        });
        self.pos = end;
    }

    /// Handle a line end: insert a semicolon if the previous token allows it.
    fn newline(&mut self) {
        let insert = self.tokens.last().is_some_and(|last| match last.kind {
            TokenKind::Ident => {
                !ctorgen_core::naming::is_keyword(last.text)
                    || TERMINATING_KEYWORDS.contains(&last.text)
            }
            TokenKind::Number | TokenKind::Rune | TokenKind::String => true,
            TokenKind::Punct => matches!(last.text, ")" | "]" | "}" | "++" | "--"),
            TokenKind::Semi => false,
        });
        if insert {
            self.tokens.push(Token {
                kind: TokenKind::Semi,
                text: "\n",
                line: self.line,
            });
        }
        self.line += 1;
    }

    fn line_comment(&mut self) {
        let len = self.rest().find('\n').unwrap_or(self.rest().len());
        self.pos += len;
    }

    fn block_comment(&mut self) -> CtorgenResult<()> {
        let start_line = self.line;
        let Some(len) = self.rest()[2..].find("*/") else {
            return Err(CtorgenError::syntax(start_line, "comment not terminated"));
        };
        let body = &self.rest()[..len + 4];
        let newlines = body.matches('\n').count();
        self.pos += body.len();
        // A comment spanning lines acts like a newline
        if newlines > 0 {
            self.newline();
            self.line += newlines - 1;
        }
        Ok(())
    }

    fn interpreted_string(&mut self) -> CtorgenResult<()> {
        let start = self.pos;
        let mut escaped = false;
        for (i, c) in self.rest().char_indices().skip(1) {
            match c {
                '\n' => break,
                '\\' if !escaped => escaped = true,
                '"' if !escaped => {
                    self.push(TokenKind::String, start, start + i + 1);
                    return Ok(());
                }
                _ => escaped = false,
            }
        }
        Err(CtorgenError::syntax(self.line, "string literal not terminated"))
    }

    fn raw_string(&mut self) -> CtorgenResult<()> {
        let start = self.pos;
        let Some(len) = self.rest()[1..].find('`') else {
            return Err(CtorgenError::syntax(
                self.line,
                "raw string literal not terminated",
            ));
        };
        let end = start + len + 2;
        let newlines = self.source[start..end].matches('\n').count();
        self.push(TokenKind::String, start, end);
        self.line += newlines;
        Ok(())
    }

    fn rune(&mut self) -> CtorgenResult<()> {
        let start = self.pos;
        let mut escaped = false;
        for (i, c) in self.rest().char_indices().skip(1) {
            match c {
                '\n' => break,
                '\\' if !escaped => escaped = true,
                '\'' if !escaped => {
                    self.push(TokenKind::Rune, start, start + i + 1);
                    return Ok(());
                }
                _ => escaped = false,
            }
        }
        Err(CtorgenError::syntax(self.line, "rune literal not terminated"))
    }

    fn number(&mut self) {
        let start = self.pos;
        let mut prev = '\0';
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| {
                let exponent_sign = matches!(c, '+' | '-') && matches!(prev, 'e' | 'E' | 'p' | 'P');
                prev = c;
                !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign)
            })
            .map(|(i, _)| i)
            .unwrap_or(self.rest().len());
        self.push(TokenKind::Number, start, start + len);
    }

    fn ident(&mut self) {
        let start = self.pos;
        let len = self
            .rest()
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(self.rest().len());
        self.push(TokenKind::Ident, start, start + len);
    }

    fn punct(&mut self) -> CtorgenResult<()> {
        let start = self.pos;
        match PUNCTUATION.iter().find(|p| self.rest().starts_with(**p)) {
            Some(p) => {
                self.push(TokenKind::Punct, start, start + p.len());
                Ok(())
            }
            None => Err(CtorgenError::syntax(
                self.line,
                format!("unexpected character {:?}", self.peek().unwrap_or_default()),
            )),
        }
    }
}
