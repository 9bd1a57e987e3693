//! The source of observable market data.
//!
//! Two identifiers that refer to the same logical data can still differ by
//! provenance. `ObservableSource` is that dimension: either no particular
//! source, or a named provider.
//!
//! ## Text Form
//!
//! - `None` for [`ObservableSource::None`] (parsing accepts any ASCII case)
//! - the bare name for a named source, e.g. `BBG` or `reuters_eod`
//!
//! Source names match `[A-Za-z_][A-Za-z0-9_]*` and are at most
//! [`MAX_SOURCE_NAME_LENGTH`] bytes.

use std::fmt;
use std::str::FromStr;

use crate::IdError;

/// Maximum source name length in bytes.
pub const MAX_SOURCE_NAME_LENGTH: usize = 256;

/// Text form of [`ObservableSource::None`].
const NONE_TEXT: &str = "None";

/// A validated, case-sensitive source name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceName(String);

impl SourceName {
    /// Parses and validates a source name.
    pub fn parse(name: &str) -> Result<Self, IdError> {
        validate_name(name)?;
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn validate_name(name: &str) -> Result<(), IdError> {
    if name.len() > MAX_SOURCE_NAME_LENGTH {
        return Err(IdError::InvalidSourceName {
            name: name.to_string(),
            reason: format!("exceeds maximum length of {MAX_SOURCE_NAME_LENGTH} bytes"),
        });
    }

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(IdError::Empty);
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(IdError::InvalidSourceName {
            name: name.to_string(),
            reason: "must start with a letter or underscore".to_string(),
        });
    }

    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Err(IdError::InvalidSourceName {
                name: name.to_string(),
                reason: format!("contains invalid character '{c}'"),
            });
        }
    }

    if name.eq_ignore_ascii_case(NONE_TEXT) {
        return Err(IdError::InvalidSourceName {
            name: name.to_string(),
            reason: "reserved for the absent source".to_string(),
        });
    }

    Ok(())
}

/// The source of observable market data.
///
/// `None` sorts before every named source.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObservableSource {
    /// No particular source; the default for most lookups.
    #[default]
    None,
    /// A named market data provider.
    Named(SourceName),
}

impl ObservableSource {
    /// Creates a named source, validating the name.
    pub fn named(name: &str) -> Result<Self, IdError> {
        SourceName::parse(name).map(Self::Named)
    }

    /// Parses a source from its text form.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.eq_ignore_ascii_case(NONE_TEXT) {
            return Ok(Self::None);
        }
        Self::named(s)
    }

    /// Returns true if this is the absent source.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the provider name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Named(name) => Some(name.as_str()),
        }
    }

    /// Returns the canonical text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => NONE_TEXT,
            Self::Named(name) => name.as_str(),
        }
    }
}

impl fmt::Display for ObservableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservableSource {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for ObservableSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ObservableSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_parses_any_case() {
        for text in ["None", "NONE", "none", "nOnE"] {
            assert_eq!(ObservableSource::parse(text).unwrap(), ObservableSource::None);
        }
    }

    #[test]
    fn test_none_display() {
        assert_eq!(ObservableSource::None.to_string(), "None");
        assert!(ObservableSource::None.is_none());
        assert_eq!(ObservableSource::None.name(), None);
    }

    #[test]
    fn test_named_roundtrip() {
        let source: ObservableSource = "BBG".parse().unwrap();
        assert_eq!(source.name(), Some("BBG"));
        assert_eq!(source.to_string(), "BBG");
        assert_eq!(source.to_string().parse::<ObservableSource>().unwrap(), source);
    }

    #[test]
    fn test_named_is_case_sensitive() {
        let upper = ObservableSource::named("BBG").unwrap();
        let lower = ObservableSource::named("bbg").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_invalid_character() {
        let result = ObservableSource::parse("not-a-source");
        assert!(matches!(
            result.unwrap_err(),
            IdError::InvalidSourceName { .. }
        ));
    }

    #[test]
    fn test_invalid_leading_digit() {
        assert!(ObservableSource::named("1source").is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(ObservableSource::parse("").unwrap_err(), IdError::Empty);
    }

    #[test]
    fn test_too_long() {
        let name = "a".repeat(MAX_SOURCE_NAME_LENGTH + 1);
        assert!(ObservableSource::named(&name).is_err());
        let name = "a".repeat(MAX_SOURCE_NAME_LENGTH);
        assert!(ObservableSource::named(&name).is_ok());
    }

    #[test]
    fn test_none_name_reserved() {
        assert!(SourceName::parse("NONE").is_err());
        assert!(ObservableSource::named("none").is_err());
    }

    #[test]
    fn test_none_sorts_first() {
        let named = ObservableSource::named("A").unwrap();
        assert!(ObservableSource::None < named);
    }

    #[test]
    fn test_json_roundtrip() {
        let source = ObservableSource::named("reuters_eod").unwrap();
        let json = serde_json::to_string(&source).unwrap();
        assert_eq!(json, "\"reuters_eod\"");
        let parsed: ObservableSource = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, source);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let result: Result<ObservableSource, _> = serde_json::from_str("\"bad name\"");
        assert!(result.is_err());
    }
}
