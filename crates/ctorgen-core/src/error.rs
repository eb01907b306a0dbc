//! Error types for constructor generation

use thiserror::Error;

/// Result type alias for ctorgen operations
pub type CtorgenResult<T> = Result<T, CtorgenError>;

/// Error type for ctorgen operations
///
/// Generation is a pure function of its inputs, so none of these are
/// retryable: the same inputs always reproduce the same error.
#[derive(Error, Debug)]
pub enum CtorgenError {
    /// The generation request itself is invalid (empty type name, no patterns, unknown pattern)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The requested type was not found
    #[error("struct {type_name} not found in {location}")]
    Lookup { type_name: String, location: String },

    /// The source text could not be parsed
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// The type was found but uses a construct the generator does not handle
    #[error("unsupported type {type_name}: {reason}")]
    Unsupported { type_name: String, reason: String },

    /// I/O error while reading source files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CtorgenError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        CtorgenError::Configuration(message.into())
    }

    /// Create a lookup error for a type that could not be found
    pub fn lookup(type_name: impl Into<String>, location: impl Into<String>) -> Self {
        CtorgenError::Lookup {
            type_name: type_name.into(),
            location: location.into(),
        }
    }

    /// Create a syntax error at the given 1-based line
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        CtorgenError::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Stable short name of the error category, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CtorgenError::Configuration(_) => "configuration",
            CtorgenError::Lookup { .. } => "lookup",
            CtorgenError::Syntax { .. } => "syntax",
            CtorgenError::Unsupported { .. } => "unsupported",
            CtorgenError::Io(_) => "io",
        }
    }
}
