//! ctorgen-cli - Command implementations for the `ctorgen` binary
//!
//! Commands:
//! - `ctorgen generate` - Generate constructors for one struct
//! - `ctorgen inspect` - Print the parsed struct model as JSON
//! - `ctorgen batch` - Generate every struct listed in a ctorgen.toml manifest
//! - `ctorgen check` - Validate a ctorgen.toml manifest

pub mod batch;
pub mod generate;
pub mod logging;
pub mod manifest;

pub use generate::{GenerateOptions, GenerateRequest};
pub use manifest::Manifest;
