//! ctorgen-core - Constructor code generation for Go structs
//!
//! This crate turns a parsed struct description into Go source implementing
//! up to three construction patterns plus optional accessors:
//! - [`tag`] resolves `construction:"..."` field tags into skip directives
//! - [`naming`] derives accessor, mutator, option, and parameter names
//! - [`StructModel`] and [`Field`] describe the struct being generated for
//! - [`GenerationConfig`] selects patterns and their options
//! - [`Generator`] emits the source text
//!
//! Generation is a pure function of its inputs: no state is kept between
//! calls and identical inputs always yield byte-identical output.

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod tag;

pub use config::{GenerationConfig, Pattern};
pub use error::{CtorgenError, CtorgenResult};
pub use generator::Generator;
pub use model::{Field, Import, StructModel, Visibility};
pub use tag::TagDirectives;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CtorgenError, CtorgenResult, Field, GenerationConfig, Generator, Import, Pattern,
        StructModel, TagDirectives, Visibility,
    };
}
