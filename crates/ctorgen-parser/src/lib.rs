//! ctorgen-parser - Go struct declaration parsing for ctorgen
//!
//! Reads Go source and materializes the [`StructModel`] the generator
//! consumes:
//! - [`lexer`] tokenizes Go with automatic semicolon insertion
//! - [`parser`] extracts the package, imports, and struct declarations
//! - [`locate`] finds the file declaring a type and names the output file
//!
//! [`StructModel`]: ctorgen_core::StructModel

pub mod lexer;
pub mod locate;
pub mod parser;
mod render;

pub use locate::{GOFILE_ENV, default_output_path, locate_source, locate_source_with};
pub use parser::{ParsedFile, StructDecl, parse_file, parse_source, parse_struct};
pub use render::render_type;
