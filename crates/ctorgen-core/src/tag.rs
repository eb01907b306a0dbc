//! Struct tag directive resolution
//!
//! A Go struct tag is a list of whitespace-separated `key:"value"` pairs.
//! Three of them carry directives for the generator:
//!
//! | Token | Effect |
//! |-------|--------|
//! | `construction:"-"` | field is skipped everywhere |
//! | `construction:"getter:false"` | no accessor for the field |
//! | `construction:"setter:false"` | field is not a constructor parameter, mutator, or option |
//! | `newc:"-"`, `gonstructor:"-"` | legacy spellings of the full skip |
//!
//! Tokens are folded left to right into a [`TagDirectives`]; a token can add a
//! flag but never clear one. Anything unrecognized is ignored.

use serde::{Deserialize, Serialize};

/// Primary directive key
pub const DIRECTIVE_KEY: &str = "construction";

/// Legacy keys that only understand the full-skip marker
pub const LEGACY_KEYS: [&str; 2] = ["newc", "gonstructor"];

const SKIP_MARKER: &str = "-";
const ACCESSOR_DISABLED: &str = "getter:false";
const MUTATOR_DISABLED: &str = "setter:false";

/// The three generator directives carried by a field tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagDirectives {
    /// Skip the field completely
    pub skip_all: bool,

    /// Skip accessor generation only
    pub skip_accessor: bool,

    /// Skip constructor parameter, builder mutator, and option function
    pub skip_mutator: bool,
}

impl TagDirectives {
    /// No directives set
    pub const NONE: TagDirectives = TagDirectives {
        skip_all: false,
        skip_accessor: false,
        skip_mutator: false,
    };

    /// Fold one tag token into the accumulator.
    ///
    /// Returns a new value; flags already set stay set.
    pub fn apply(self, token: &str) -> Self {
        let Some((key, value)) = split_token(token) else {
            return self;
        };

        let mut next = self;
        if key == DIRECTIVE_KEY {
            if value == SKIP_MARKER {
                next.skip_all = true;
            } else {
                next.skip_accessor |= value.contains(ACCESSOR_DISABLED);
                next.skip_mutator |= value.contains(MUTATOR_DISABLED);
            }
        } else if LEGACY_KEYS.contains(&key) && value == SKIP_MARKER {
            next.skip_all = true;
        }
        next
    }

    /// Whether the field may appear as a constructor parameter, mutator, or option
    pub fn allows_construction(&self) -> bool {
        !self.skip_all && !self.skip_mutator
    }

    /// Whether the field may receive an accessor (visibility permitting)
    pub fn allows_accessor(&self) -> bool {
        !self.skip_all && !self.skip_accessor
    }
}

/// Resolve a raw tag into its directives.
///
/// Accepts the tag with or without its surrounding backticks. Empty input
/// resolves to [`TagDirectives::NONE`].
pub fn resolve(raw: &str) -> TagDirectives {
    tokens(raw).fold(TagDirectives::NONE, TagDirectives::apply)
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.trim().trim_matches('`').split_whitespace()
}

/// Split `key:"value"` into `(key, value)` with the value unquoted.
fn split_token(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once(':')?;
    Some((key, value.trim_matches('"')))
}
