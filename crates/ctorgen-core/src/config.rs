//! Generation configuration

use crate::error::{CtorgenError, CtorgenResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A construction pattern
///
/// Variants are ordered the way their code is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// `New<T>(...)` taking every constructor field
    #[serde(rename = "allArgs")]
    AllArgs,

    /// `<T>Builder` with chained mutators and `Build()`
    #[serde(rename = "builder")]
    Builder,

    /// `<T>Option` functions applied by `New<T>WithOptions`
    #[serde(rename = "options")]
    Options,
}

impl Pattern {
    /// All patterns in emission order
    pub const ALL: [Pattern; 3] = [Pattern::AllArgs, Pattern::Builder, Pattern::Options];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::AllArgs => "allArgs",
            Pattern::Builder => "builder",
            Pattern::Options => "options",
        }
    }

    /// Parse a comma-separated pattern list such as `"allArgs, builder"`.
    ///
    /// Entries are trimmed and deduplicated. A blank list yields an empty
    /// set; an empty entry inside a list such as `"allArgs,,builder"` is
    /// rejected like any other unknown name.
    pub fn parse_list(list: &str) -> CtorgenResult<BTreeSet<Pattern>> {
        if list.trim().is_empty() {
            return Ok(BTreeSet::new());
        }
        list.split(',').map(str::trim).map(Pattern::from_str).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = CtorgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                CtorgenError::configuration(format!(
                    "invalid constructor type '{s}'. Valid types: allArgs, builder, options"
                ))
            })
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Name of the struct to generate for
    pub type_name: String,

    /// Requested construction patterns
    pub patterns: BTreeSet<Pattern>,

    /// Zero-argument method invoked on every freshly built instance
    #[serde(default)]
    pub init_hook: Option<String>,

    /// Return `T` instead of `*T`
    #[serde(default)]
    pub return_by_value: bool,

    /// Prefix for builder mutator names (e.g. `With`)
    #[serde(default)]
    pub mutator_prefix: Option<String>,

    /// Generate `Get<Field>()` accessors for private fields
    #[serde(default)]
    pub emit_accessors: bool,
}

impl GenerationConfig {
    /// Create a configuration with no patterns selected
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            patterns: BTreeSet::new(),
            init_hook: None,
            return_by_value: false,
            mutator_prefix: None,
            emit_accessors: false,
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.insert(pattern);
        self
    }

    pub fn with_patterns(mut self, patterns: impl IntoIterator<Item = Pattern>) -> Self {
        self.patterns.extend(patterns);
        self
    }

    /// Set the init hook; an empty name clears it.
    pub fn with_init_hook(mut self, hook: impl Into<String>) -> Self {
        self.init_hook = non_empty(hook.into());
        self
    }

    pub fn with_return_by_value(mut self, by_value: bool) -> Self {
        self.return_by_value = by_value;
        self
    }

    /// Set the mutator prefix; an empty prefix clears it.
    pub fn with_mutator_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.mutator_prefix = non_empty(prefix.into());
        self
    }

    pub fn with_accessors(mut self, emit: bool) -> Self {
        self.emit_accessors = emit;
        self
    }

    pub fn wants(&self, pattern: Pattern) -> bool {
        self.patterns.contains(&pattern)
    }

    /// Check the invariants the generator owns.
    pub fn validate(&self) -> CtorgenResult<()> {
        if self.type_name.trim().is_empty() {
            return Err(CtorgenError::configuration("type name cannot be empty"));
        }
        if self.patterns.is_empty() {
            return Err(CtorgenError::configuration(
                "at least one constructor type must be requested",
            ));
        }
        Ok(())
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
