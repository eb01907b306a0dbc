//! Go source generation from a [`StructModel`].
//!
//! Each [`Pattern`] is an independent emission strategy over the same field
//! selection; the generator concatenates the requested ones and appends the
//! accessor block once.
//!
//! ```text
//! StructModel + GenerationConfig
//!     ↓
//!  header, package, imports
//!     ↓
//!  ├─→ [all_args]  New<T>(...)
//!  ├─→ [builder]   <T>Builder / Build()
//!  ├─→ [options]   <T>Option / New<T>WithOptions(...)
//!  └─→ [accessors] Get<Field>()
//! ```
//!
//! # Example
//!
//! ```
//! use ctorgen_core::{Field, GenerationConfig, Generator, Pattern, StructModel};
//!
//! let model = StructModel::new("User", "models")
//!     .with_field(Field::new("name", "string"))
//!     .with_field(Field::new("age", "int"));
//! let config = GenerationConfig::new("User").with_pattern(Pattern::AllArgs);
//!
//! let code = Generator::new(&config, &model).generate().unwrap();
//! assert!(code.contains("func NewUser(name string, age int) *User {"));
//! ```

pub mod accessors;
pub mod all_args;
pub mod builder;
pub mod options;
mod writer;

use crate::config::{GenerationConfig, Pattern};
use crate::error::{CtorgenError, CtorgenResult};
use crate::model::{Import, StructModel};
use crate::naming;
use std::collections::BTreeSet;

/// First line of every generated file, matching Go's generated-code convention
pub const GENERATED_HEADER: &str = "// Code generated by ctorgen. DO NOT EDIT.";

/// Generates constructor code for one struct
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    config: &'a GenerationConfig,
    model: &'a StructModel,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GenerationConfig, model: &'a StructModel) -> Self {
        Self { config, model }
    }

    /// Generate the complete source file.
    ///
    /// Fails without producing output if the configuration is invalid or
    /// the model describes a different type.
    pub fn generate(&self) -> CtorgenResult<String> {
        self.config.validate()?;
        if self.config.type_name != self.model.type_name {
            return Err(CtorgenError::lookup(
                &self.config.type_name,
                format!("parsed model (found {})", self.model.type_name),
            ));
        }

        let mut sections = Vec::new();
        for &pattern in &self.config.patterns {
            tracing::debug!(
                type_name = %self.model.type_name,
                %pattern,
                fields = self.model.constructor_fields().len(),
                "emitting pattern"
            );
            sections.push(self.emit_pattern(pattern));
        }
        if self.config.emit_accessors {
            let block = accessors::emit(self.model);
            tracing::debug!(
                type_name = %self.model.type_name,
                accessors = self.model.accessor_fields().len(),
                "emitting accessors"
            );
            if !block.is_empty() {
                sections.push(block);
            }
        }

        let mut code = String::new();
        code.push_str(GENERATED_HEADER);
        code.push_str("\n\n");
        code.push_str(&format!("package {}\n", self.model.namespace));

        let imports = self.used_imports();
        if !imports.is_empty() {
            code.push('\n');
            code.push_str(&render_imports(&imports));
        }

        for section in sections {
            code.push('\n');
            code.push_str(&section);
        }

        Ok(code)
    }

    /// Emit a single pattern's declarations.
    pub fn emit_pattern(&self, pattern: Pattern) -> String {
        match pattern {
            Pattern::AllArgs => all_args::emit(self.model, self.config),
            Pattern::Builder => builder::emit(self.model, self.config),
            Pattern::Options => options::emit(self.model, self.config),
        }
    }

    /// Imports whose package is referenced by a field type in the emitted code,
    /// sorted by path.
    pub fn used_imports(&self) -> Vec<&'a Import> {
        let model = self.model;
        let mut spellings: Vec<&str> = Vec::new();
        if !self.config.patterns.is_empty() {
            spellings.extend(
                model
                    .constructor_fields()
                    .into_iter()
                    .map(|f| f.type_spelling.as_str()),
            );
        }
        if self.config.emit_accessors {
            spellings.extend(
                model
                    .accessor_fields()
                    .into_iter()
                    .map(|f| f.type_spelling.as_str()),
            );
        }

        let mut qualifiers: BTreeSet<&str> = BTreeSet::new();
        let mut unqualified = false;
        for ident in spellings.into_iter().flat_map(type_identifiers) {
            match ident {
                TypeIdent::Qualifier(package) => {
                    qualifiers.insert(package);
                }
                TypeIdent::Bare(name) => {
                    unqualified |= !naming::is_keyword(name)
                        && !naming::is_predeclared_type(name)
                        && name != model.type_name;
                }
            }
        }

        // A dot import cannot be matched by name; keep it while any bare
        // non-builtin identifier might come from it.
        let mut imports: Vec<&Import> = model
            .imports
            .iter()
            .filter(|import| match import.alias.as_deref() {
                Some(".") => unqualified,
                _ => qualifiers.contains(import.package_name()),
            })
            .collect();
        imports.sort_by(|a, b| a.path.cmp(&b.path));
        imports.dedup_by(|a, b| a.path == b.path && a.alias == b.alias);
        imports
    }
}

/// Package qualifiers referenced by a type spelling (`map[string]*time.Time` → `time`).
pub fn package_qualifiers(spelling: &str) -> Vec<&str> {
    type_identifiers(spelling)
        .into_iter()
        .filter_map(|ident| match ident {
            TypeIdent::Qualifier(package) => Some(package),
            TypeIdent::Bare(_) => None,
        })
        .collect()
}

/// An identifier in a type spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeIdent<'s> {
    /// `time` in `time.Duration`
    Qualifier(&'s str),

    /// An unqualified name such as `int`, `map` or a local type
    Bare(&'s str),
}

/// Identifiers of a type spelling, skipping the selector after each
/// qualifier and the contents of string literals.
fn type_identifiers(spelling: &str) -> Vec<TypeIdent<'_>> {
    let is_ident_char = |c: char| c.is_alphanumeric() || c == '_';
    let mut idents = Vec::new();
    let mut rest = spelling;
    let mut selector = false;

    while let Some(c) = rest.chars().next() {
        if is_ident_char(c) {
            let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
            let (ident, tail) = rest.split_at(end);
            if selector {
                selector = false;
            } else if c.is_ascii_digit() {
                // array length
            } else if tail.starts_with('.') && !tail.starts_with("...") {
                idents.push(TypeIdent::Qualifier(ident));
                selector = true;
            } else {
                idents.push(TypeIdent::Bare(ident));
            }
            rest = tail;
        } else if c == '"' || c == '`' {
            let close = rest[1..].find(c).map_or(rest.len(), |i| i + 2);
            rest = &rest[close..];
        } else {
            rest = &rest[c.len_utf8()..];
        }
    }

    idents
}

fn render_imports(imports: &[&Import]) -> String {
    let spec = |import: &Import| match &import.alias {
        Some(alias) => format!("{alias} \"{}\"", import.path),
        None => format!("\"{}\"", import.path),
    };

    match imports {
        [single] => format!("import {}\n", spec(single)),
        many => {
            let mut block = String::from("import (\n");
            for import in many {
                block.push_str(&format!("\t{}\n", spec(import)));
            }
            block.push_str(")\n");
            block
        }
    }
}
