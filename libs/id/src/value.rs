//! Type-erased property values.
//!
//! Generic code reads and writes identifier fields by name, so field values
//! cross that boundary as a [`PropertyValue`]. Concrete field types opt in
//! through [`PropertyType`], which also names their canonical text parser.

use std::fmt;

use crate::{IdError, ObservableSource};

/// A field value detached from its bean.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PropertyValue {
    /// An observable market data source.
    ObservableSource(ObservableSource),
    /// Free-form text.
    Text(String),
    /// A signed integer.
    Integer(i64),
}

impl PropertyValue {
    /// Returns the declared type name of the contained value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::ObservableSource(_) => ObservableSource::TYPE_NAME,
            PropertyValue::Text(_) => String::TYPE_NAME,
            PropertyValue::Integer(_) => i64::TYPE_NAME,
        }
    }

    /// Converts into a concrete type, reporting a mismatch against `property`.
    pub fn into_typed<T: PropertyType>(self, property: &'static str) -> Result<T, IdError> {
        T::from_value(self).map_err(|value| IdError::TypeMismatch {
            property,
            expected: T::TYPE_NAME,
            actual: value.type_name(),
        })
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::ObservableSource(source) => source.fmt(f),
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Integer(n) => n.fmt(f),
        }
    }
}

/// A type that can be stored in an identifier field.
pub trait PropertyType: Clone + fmt::Display + Sized {
    /// Name reported in type mismatch errors.
    const TYPE_NAME: &'static str;

    /// Wraps the value.
    fn into_value(self) -> PropertyValue;

    /// Unwraps the value, handing it back unchanged if the type differs.
    fn from_value(value: PropertyValue) -> Result<Self, PropertyValue>;

    /// The canonical parser for this type's text form.
    fn parse_text(text: &str) -> Result<Self, IdError>;
}

impl PropertyType for ObservableSource {
    const TYPE_NAME: &'static str = "ObservableSource";

    fn into_value(self) -> PropertyValue {
        PropertyValue::ObservableSource(self)
    }

    fn from_value(value: PropertyValue) -> Result<Self, PropertyValue> {
        match value {
            PropertyValue::ObservableSource(source) => Ok(source),
            other => Err(other),
        }
    }

    fn parse_text(text: &str) -> Result<Self, IdError> {
        ObservableSource::parse(text)
    }
}

impl PropertyType for String {
    const TYPE_NAME: &'static str = "String";

    fn into_value(self) -> PropertyValue {
        PropertyValue::Text(self)
    }

    fn from_value(value: PropertyValue) -> Result<Self, PropertyValue> {
        match value {
            PropertyValue::Text(text) => Ok(text),
            other => Err(other),
        }
    }

    fn parse_text(text: &str) -> Result<Self, IdError> {
        Ok(text.to_string())
    }
}

impl PropertyType for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn into_value(self) -> PropertyValue {
        PropertyValue::Integer(self)
    }

    fn from_value(value: PropertyValue) -> Result<Self, PropertyValue> {
        match value {
            PropertyValue::Integer(n) => Ok(n),
            other => Err(other),
        }
    }

    fn parse_text(text: &str) -> Result<Self, IdError> {
        text.trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| IdError::InvalidFormat {
                message: e.to_string(),
            })
    }
}

impl From<ObservableSource> for PropertyValue {
    fn from(source: ObservableSource) -> Self {
        source.into_value()
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        text.into_value()
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        n.into_value()
    }
}
