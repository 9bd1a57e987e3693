//! Error types for identifier construction and property access.

use thiserror::Error;

/// Errors that can occur when building identifiers or accessing their
/// properties by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// One or more required properties were not set before `build()`.
    #[error("{bean} is missing required properties: {}", .missing.join(", "))]
    Validation {
        bean: &'static str,
        missing: Vec<&'static str>,
    },

    /// The property name is not declared by the bean.
    #[error("unknown property '{name}' on {bean}")]
    UnknownProperty { bean: &'static str, name: String },

    /// The property belongs to a built, immutable bean.
    #[error("property '{name}' on {bean} cannot be written")]
    ReadOnlyProperty { bean: &'static str, name: String },

    /// Text could not be parsed into the property's declared type.
    #[error("cannot parse '{text}' for property '{property}': {reason}")]
    Parse {
        property: &'static str,
        text: String,
        reason: String,
    },

    /// A value of the wrong type was supplied for a property.
    #[error("property '{property}' expects {expected}, got {actual}")]
    TypeMismatch {
        property: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The source name is empty.
    #[error("source name cannot be empty")]
    Empty,

    /// The source name is malformed.
    #[error("invalid source name '{name}': {reason}")]
    InvalidSourceName { name: String, reason: String },

    /// A field value's text form is malformed.
    #[error("invalid format: {message}")]
    InvalidFormat { message: String },
}

impl IdError {
    /// Returns true if this error reports missing required properties.
    pub fn is_validation(&self) -> bool {
        matches!(self, IdError::Validation { .. })
    }

    /// Returns true if this error reports an undeclared property name.
    pub fn is_unknown_property(&self) -> bool {
        matches!(self, IdError::UnknownProperty { .. })
    }

    /// Returns true if this error reports a write to a read-only property.
    pub fn is_read_only(&self) -> bool {
        matches!(self, IdError::ReadOnlyProperty { .. })
    }

    /// Returns true if this error reports unparseable text.
    pub fn is_parse(&self) -> bool {
        matches!(self, IdError::Parse { .. })
    }
}
