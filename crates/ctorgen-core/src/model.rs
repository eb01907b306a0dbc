//! Struct and field model consumed by the generator
//!
//! The model is a plain value tree: the parser materializes it once and the
//! generator only ever reads it.

use crate::naming;
use crate::tag::{self, TagDirectives};
use serde::{Deserialize, Serialize};

/// Visibility of a Go identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Exported,
    Private,
}

impl Visibility {
    /// Visibility implied by the case of an identifier's first character
    pub fn of(ident: &str) -> Self {
        if naming::is_exported(ident) {
            Visibility::Exported
        } else {
            Visibility::Private
        }
    }
}

/// A single struct field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name (for embedded fields, the unqualified type name)
    pub name: String,

    /// Type as spelled in source, e.g. `map[string]int`
    pub type_spelling: String,

    /// Raw tag text, kept so directive resolution can be audited
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,

    pub visibility: Visibility,

    /// Whether the field is embedded (declared by type only)
    #[serde(default)]
    pub embedded: bool,

    pub skip_all: bool,
    pub skip_accessor: bool,
    pub skip_mutator: bool,
}

impl Field {
    /// Create an untagged field; visibility follows the name.
    pub fn new(name: impl Into<String>, type_spelling: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            visibility: Visibility::of(&name),
            name,
            type_spelling: type_spelling.into(),
            tag: String::new(),
            embedded: false,
            skip_all: false,
            skip_accessor: false,
            skip_mutator: false,
        }
    }

    /// Create an embedded field from its type spelling (`*pkg.Logger` is named `Logger`).
    pub fn embedded(type_spelling: impl Into<String>) -> Self {
        let type_spelling = type_spelling.into();
        let name = embedded_name(&type_spelling).to_string();
        Self {
            embedded: true,
            ..Self::new(name, type_spelling)
        }
    }

    /// Attach a raw tag and resolve its directives.
    pub fn with_tag(mut self, raw: impl Into<String>) -> Self {
        self.tag = raw.into();
        self.apply_directives(tag::resolve(&self.tag));
        self
    }

    /// Merge directives into the field's flags. Flags are never cleared.
    pub fn apply_directives(&mut self, directives: TagDirectives) {
        self.skip_all |= directives.skip_all;
        self.skip_accessor |= directives.skip_accessor;
        self.skip_mutator |= directives.skip_mutator;
    }

    /// The flags as a directive set
    pub fn directives(&self) -> TagDirectives {
        TagDirectives {
            skip_all: self.skip_all,
            skip_accessor: self.skip_accessor,
            skip_mutator: self.skip_mutator,
        }
    }

    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Exported
    }

    /// Eligible as constructor parameter, builder mutator, and option
    pub fn is_constructor_field(&self) -> bool {
        self.directives().allows_construction()
    }

    /// Eligible for a generated accessor
    pub fn is_accessor_field(&self) -> bool {
        self.directives().allows_accessor() && !self.is_exported()
    }
}

/// An import declaration of the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Explicit package alias (`_` and `.` included)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Import path without quotes
    pub path: String,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }

    /// Name the package is referred to by in source.
    ///
    /// The alias if present. Otherwise the name is assumed from the path the
    /// way goimports does: a trailing major-version segment (`/v9`) is
    /// skipped, a `go-` prefix is dropped and the rest is cut at the first
    /// character that cannot appear in an identifier (`yaml.v3` → `yaml`).
    pub fn package_name(&self) -> &str {
        if let Some(alias) = &self.alias {
            return alias;
        }

        let mut segments = self.path.rsplit('/');
        let mut name = segments.next().unwrap_or(&self.path);
        if is_major_version(name)
            && let Some(parent) = segments.next()
        {
            name = parent;
        }
        let name = name.strip_prefix("go-").unwrap_or(name);
        let end = name
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(name.len());
        &name[..end]
    }
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// A parsed struct type: the unit the generator consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructModel {
    pub type_name: String,

    /// Declaring Go package
    pub namespace: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// Imports of the declaring file
    #[serde(default)]
    pub imports: Vec<Import>,
}

impl StructModel {
    pub fn new(type_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            namespace: namespace.into(),
            fields: Vec::new(),
            imports: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Fields that take part in construction, in declaration order
    pub fn constructor_fields(&self) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|f| f.is_constructor_field())
            .collect()
    }

    /// Private fields that receive accessors, in declaration order
    pub fn accessor_fields(&self) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|f| f.is_accessor_field())
            .collect()
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Name of an embedded field: its type with pointer and package qualifier removed.
fn embedded_name(type_spelling: &str) -> &str {
    let unpointed = type_spelling.trim_start_matches('*');
    let unqualified = unpointed.rsplit('.').next().unwrap_or(unpointed);
    // Instantiated generic embeds (`List[int]`) are named by the base type
    unqualified.split('[').next().unwrap_or(unqualified)
}
