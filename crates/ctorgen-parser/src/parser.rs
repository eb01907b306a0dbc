//! Go declaration parser
//!
//! Walks the token stream of a single Go file and collects what generation
//! needs: the package clause, the import declarations, and every top-level
//! struct type. Function bodies and other declarations are skipped by
//! bracket depth without being interpreted.
//!
//! # Supported declarations
//!
//! - `type T struct { ... }` standalone or inside a grouped `type ( ... )`
//! - Multi-name fields (`a, b int`) sharing one type and tag
//! - Embedded fields (`Base`, `*pkg.Logger`, `List[int]`)
//! - Raw and interpreted tag literals
//!
//! Generic struct types are recognized so that they can be rejected with a
//! precise error instead of being mis-generated.

use crate::lexer::{self, Token, TokenKind};
use crate::render::render_type;
use ctorgen_core::{CtorgenError, CtorgenResult, Field, Import, StructModel};
use std::path::Path;
use tracing::debug;

/// Declarations extracted from one Go file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    pub package: String,
    pub imports: Vec<Import>,
    pub structs: Vec<StructDecl>,
}

/// A top-level struct type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,

    /// 1-based line of the type name
    pub line: usize,

    /// Whether the declaration has type parameters
    pub generic: bool,

    /// Fields in declaration order, including skipped ones
    pub fields: Vec<Field>,
}

impl ParsedFile {
    /// Whether the file declares a struct type with this name.
    pub fn declares_struct(&self, type_name: &str) -> bool {
        self.find(type_name).is_some()
    }

    fn find(&self, type_name: &str) -> Option<&StructDecl> {
        self.structs.iter().find(|s| s.name == type_name)
    }

    /// Build the generation model for one struct of this file.
    ///
    /// `location` names the source in a Lookup error.
    pub fn struct_model(&self, type_name: &str, location: &str) -> CtorgenResult<StructModel> {
        let decl = self
            .find(type_name)
            .ok_or_else(|| CtorgenError::lookup(type_name, location))?;
        if decl.generic {
            return Err(CtorgenError::Unsupported {
                type_name: type_name.to_string(),
                reason: "generic type parameters are not supported".to_string(),
            });
        }

        let model = StructModel {
            type_name: decl.name.clone(),
            namespace: self.package.clone(),
            fields: decl.fields.clone(),
            imports: self.imports.clone(),
        };
        debug!(
            type_name,
            fields = model.fields.len(),
            imports = model.imports.len(),
            "Built struct model"
        );
        Ok(model)
    }
}

/// Parse the declarations of a Go source file.
pub fn parse_source(source: &str) -> CtorgenResult<ParsedFile> {
    let tokens = lexer::tokenize(source)?;
    Parser::new(tokens).file()
}

/// Parse Go source text and build the model of one struct.
pub fn parse_struct(source: &str, type_name: &str) -> CtorgenResult<StructModel> {
    parse_source(source)?.struct_model(type_name, "source")
}

/// Read a Go file and build the model of one struct.
pub fn parse_file(path: &Path, type_name: &str) -> CtorgenResult<StructModel> {
    debug!(path = %path.display(), type_name, "Parsing Go source");
    let source = std::fs::read_to_string(path)?;
    parse_source(&source)?.struct_model(type_name, &path.display().to_string())
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token<'a>> {
        self.tokens.get(self.pos + offset)
    }

    fn peek_is(&self, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is(text))
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let tok = self.tokens.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// Line used for errors at the current position
    fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    fn unexpected(&self, expected: &str) -> CtorgenError {
        let found = match self.peek() {
            Some(t) if t.kind == TokenKind::Semi => "end of line".to_string(),
            Some(t) => format!("'{}'", t.text),
            None => "end of file".to_string(),
        };
        CtorgenError::syntax(self.line(), format!("expected {expected}, found {found}"))
    }

    fn expect(&mut self, text: &str) -> CtorgenResult<Token<'a>> {
        match self.peek() {
            Some(t) if t.is(text) => {
                let tok = *t;
                self.pos += 1;
                Ok(tok)
            }
            _ => Err(self.unexpected(&format!("'{text}'"))),
        }
    }

    fn expect_ident(&mut self, what: &str) -> CtorgenResult<Token<'a>> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Ident => {
                let tok = *t;
                self.pos += 1;
                Ok(tok)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn skip_semis(&mut self) {
        while self.peek().is_some_and(|t| t.kind == TokenKind::Semi) {
            self.pos += 1;
        }
    }

    /// A declaration ends at a semicolon or the end of the file.
    fn end_decl(&mut self) -> CtorgenResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(t) if t.kind == TokenKind::Semi => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(self.unexpected("end of declaration")),
        }
    }

    /// Consume tokens up to a semicolon, `)`, or `}` at bracket depth zero.
    /// The terminator itself is left in place.
    fn take_balanced(&mut self) -> CtorgenResult<&[Token<'a>]> {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(tok) = self.peek() {
            if tok.kind == TokenKind::Punct {
                match tok.text {
                    "(" | "[" | "{" => depth += 1,
                    ")" | "]" | "}" if depth == 0 => break,
                    ")" | "]" | "}" => depth -= 1,
                    _ => {}
                }
            } else if tok.kind == TokenKind::Semi && depth == 0 {
                break;
            }
            self.pos += 1;
        }
        if depth > 0 {
            return Err(self.unexpected("closing bracket"));
        }
        Ok(&self.tokens[start..self.pos])
    }

    fn file(mut self) -> CtorgenResult<ParsedFile> {
        self.skip_semis();
        self.expect("package")?;
        let package = self.expect_ident("package name")?.text.to_string();
        self.end_decl()?;

        let mut imports = Vec::new();
        let mut structs = Vec::new();
        loop {
            self.skip_semis();
            let Some(tok) = self.peek() else { break };
            match (tok.kind, tok.text) {
                (TokenKind::Ident, "import") => {
                    self.pos += 1;
                    self.import_decl(&mut imports)?;
                }
                (TokenKind::Ident, "type") => {
                    self.pos += 1;
                    self.type_decl(&mut structs)?;
                }
                _ => {
                    self.take_balanced()?;
                    // A stray closer at top level would stall the loop
                    if self.peek().is_some_and(|t| t.kind != TokenKind::Semi) {
                        return Err(self.unexpected("declaration"));
                    }
                }
            }
        }

        debug!(
            package = %package,
            imports = imports.len(),
            structs = structs.len(),
            "Parsed Go file"
        );
        Ok(ParsedFile {
            package,
            imports,
            structs,
        })
    }

    fn import_decl(&mut self, imports: &mut Vec<Import>) -> CtorgenResult<()> {
        if self.peek_is("(") {
            self.pos += 1;
            loop {
                self.skip_semis();
                if self.peek_is(")") {
                    self.pos += 1;
                    break;
                }
                imports.push(self.import_spec()?);
                if !self.peek_is(")") {
                    self.end_decl()?;
                }
            }
        } else {
            imports.push(self.import_spec()?);
        }
        self.end_decl()
    }

    fn import_spec(&mut self) -> CtorgenResult<Import> {
        let alias = match self.peek() {
            Some(t) if t.kind == TokenKind::Ident || t.is(".") => {
                let alias = t.text.to_string();
                self.pos += 1;
                Some(alias)
            }
            _ => None,
        };
        let path = match self.peek() {
            Some(t) if t.kind == TokenKind::String => unquote(t.text),
            _ => return Err(self.unexpected("import path")),
        };
        self.pos += 1;

        Ok(match alias {
            Some(alias) => Import::aliased(alias, path),
            None => Import::new(path),
        })
    }

    fn type_decl(&mut self, structs: &mut Vec<StructDecl>) -> CtorgenResult<()> {
        if self.peek_is("(") {
            self.pos += 1;
            loop {
                self.skip_semis();
                if self.peek_is(")") {
                    self.pos += 1;
                    break;
                }
                self.type_spec(structs)?;
                if !self.peek_is(")") {
                    self.end_decl()?;
                }
            }
        } else {
            self.type_spec(structs)?;
        }
        self.end_decl()
    }

    fn type_spec(&mut self, structs: &mut Vec<StructDecl>) -> CtorgenResult<()> {
        let name = self.expect_ident("type name")?;

        // `T[P any]` declares parameters, `T [N]int` is an array type
        let generic = self.peek_is("[")
            && self.peek_at(1).is_some_and(|t| t.kind == TokenKind::Ident)
            && self.peek_at(2).is_some_and(|t| !t.is("]"));
        if generic {
            self.advance();
            self.take_balanced()?;
            self.expect("]")?;
        }
        if self.peek_is("=") {
            self.pos += 1;
        }

        let is_struct = self.peek_is("struct") && self.peek_at(1).is_some_and(|t| t.is("{"));
        if !is_struct {
            self.take_balanced()?;
            return Ok(());
        }
        self.pos += 2;
        let fields = self.struct_body()?;
        debug!(
            type_name = name.text,
            line = name.line,
            generic,
            fields = fields.len(),
            "Found struct declaration"
        );
        structs.push(StructDecl {
            name: name.text.to_string(),
            line: name.line,
            generic,
            fields,
        });
        Ok(())
    }

    /// Parse field declarations up to and including the closing brace.
    fn struct_body(&mut self) -> CtorgenResult<Vec<Field>> {
        let mut fields = Vec::new();
        loop {
            self.skip_semis();
            if self.peek_is("}") {
                self.pos += 1;
                return Ok(fields);
            }
            if self.peek().is_none() {
                return Err(self.unexpected("'}'"));
            }
            let line = self.line();
            let decl = self.take_balanced()?.to_vec();
            if decl.is_empty() {
                return Err(self.unexpected("field declaration"));
            }
            fields.extend(field_decl(&decl, line)?);
        }
    }
}

/// Expand one field declaration into its fields.
fn field_decl(tokens: &[Token<'_>], line: usize) -> CtorgenResult<Vec<Field>> {
    let (tokens, tag) = match tokens.split_last() {
        Some((last, rest)) if last.kind == TokenKind::String && !rest.is_empty() => {
            (rest, Some(tag_text(last.text)))
        }
        _ => (tokens, None),
    };
    let with_tag = |field: Field| match &tag {
        Some(tag) => field.with_tag(tag.as_str()),
        None => field,
    };

    if is_embedded(tokens) {
        return Ok(vec![with_tag(Field::embedded(render_type(tokens)))]);
    }

    let mut names = Vec::new();
    let mut rest = tokens;
    while let [name, tail @ ..] = rest {
        if name.kind != TokenKind::Ident {
            return Err(CtorgenError::syntax(
                name.line,
                format!("expected field name, found '{}'", name.text),
            ));
        }
        names.push(name.text);
        match tail {
            [comma, tail @ ..] if comma.is(",") => rest = tail,
            _ => {
                rest = tail;
                break;
            }
        }
    }
    if rest.is_empty() {
        return Err(CtorgenError::syntax(line, "missing field type"));
    }

    let type_spelling = render_type(rest);
    Ok(names
        .into_iter()
        // The blank identifier cannot be assigned
        .filter(|name| *name != "_")
        .map(|name| with_tag(Field::new(name, type_spelling.as_str())))
        .collect())
}

/// Declared by type only: `T`, `*T`, `pkg.T`, or `T[Args]`
fn is_embedded(tokens: &[Token<'_>]) -> bool {
    match tokens {
        [only] => only.kind == TokenKind::Ident,
        [first, ..] if first.is("*") => true,
        [first, second, ..] if first.kind == TokenKind::Ident && second.is(".") => true,
        [first, second, rest @ ..] if first.kind == TokenKind::Ident && second.is("[") => {
            let mut depth = 1usize;
            for (i, tok) in rest.iter().enumerate() {
                if tok.is("[") {
                    depth += 1;
                } else if tok.is("]") {
                    depth -= 1;
                    if depth == 0 {
                        return i == rest.len() - 1;
                    }
                }
            }
            false
        }
        _ => false,
    }
}

/// Tag text without its literal delimiters
fn tag_text(literal: &str) -> String {
    match literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
        Some(raw) => raw.to_string(),
        None => unquote(literal),
    }
}

/// Decode an interpreted string literal.
///
/// Octal, hex, and unicode escapes are kept verbatim: tags and import paths
/// never need them.
fn unquote(literal: &str) -> String {
    let body = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(escaped @ ('"' | '\\' | '\'')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
