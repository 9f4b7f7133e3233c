//! Scalar field values produced by adapters.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Flat field map for one record: field name -> scalar value.
pub type Fields = BTreeMap<String, FieldValue>;

/// A single indexable value.
///
/// Text is always lower-cased by the constructors, so adapters that build
/// values through [`FieldValue::text`], [`FieldValue::list`] or
/// [`FieldValue::opt`] satisfy the lower-casing contract by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl FieldValue {
    /// Lower-cased text value.
    pub fn text(value: impl AsRef<str>) -> Self {
        FieldValue::Text(value.as_ref().to_lowercase())
    }

    /// Optional text; `None` becomes the empty string.
    pub fn opt<S: AsRef<str>>(value: Option<S>) -> Self {
        match value {
            Some(v) => Self::text(v),
            None => FieldValue::Text(String::new()),
        }
    }

    /// A list of strings joined with ", " and lower-cased.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Self::text(joined)
    }

    /// The empty string value used for absent data.
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for a text value with at least one character.
    ///
    /// Only these values get exact and substring variants in the index.
    pub fn is_nonempty_text(&self) -> bool {
        matches!(self, FieldValue::Text(s) if !s.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_lowercased() {
        assert_eq!(FieldValue::text("Prod-WEB-01"), FieldValue::Text("prod-web-01".into()));
    }

    #[test]
    fn test_opt_none_is_empty() {
        let value = FieldValue::opt(None::<String>);
        assert_eq!(value, FieldValue::empty());
        assert!(!value.is_nonempty_text());
    }

    #[test]
    fn test_list_joins_and_skips_empty() {
        let value = FieldValue::list(["Env:Prod", "", "Team:Core"]);
        assert_eq!(value.as_text(), Some("env:prod, team:core"));
    }

    #[test]
    fn test_numbers_are_not_text() {
        assert!(!FieldValue::from(42i64).is_nonempty_text());
        assert!(!FieldValue::from(1.5f64).is_nonempty_text());
        assert_eq!(FieldValue::from(42i64).to_string(), "42");
        assert_eq!(FieldValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_untagged_deserialize() {
        let fields: Fields =
            serde_json::from_str(r#"{"name": "web", "cpus": 4, "ratio": 0.5, "public": false}"#)
                .unwrap();
        assert_eq!(fields["name"], FieldValue::Text("web".into()));
        assert_eq!(fields["cpus"], FieldValue::Integer(4));
        assert_eq!(fields["ratio"], FieldValue::Float(0.5));
        assert_eq!(fields["public"], FieldValue::Bool(false));
    }
}
