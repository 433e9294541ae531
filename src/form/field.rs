//! Field descriptor value objects

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Input kind of a form field.
///
/// The set is open: kinds this crate does not know about are kept verbatim
/// in [`FieldType::Other`] so they survive a read/write cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Single-line text
    Text,
    /// Email address
    Email,
    /// Multi-line text
    Textarea,
    /// Any kind not listed above, kept as written
    Other(String),
}

impl FieldType {
    /// Kinds accepted by [`crate::FormConfig::validate`]
    pub const RECOGNIZED: [FieldType; 3] =
        [FieldType::Text, FieldType::Email, FieldType::Textarea];

    /// Get the string form used in JSON
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Textarea => "textarea",
            FieldType::Other(s) => s,
        }
    }

    /// Returns true for `text`, `email` and `textarea`
    pub fn is_recognized(&self) -> bool {
        !matches!(self, FieldType::Other(_))
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "textarea" => FieldType::Textarea,
            _ => FieldType::Other(s),
        }
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        FieldType::from(s.to_string())
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        match t {
            FieldType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for FieldType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FieldType::from(s))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input element of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Human-readable field name
    pub label: String,
    /// Input kind, serialized under the `type` key
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field is declared as required
    pub required: bool,
}

impl FieldSpec {
    /// Create a field of any kind
    pub fn new(label: &str, field_type: FieldType, required: bool) -> Self {
        Self {
            label: label.to_string(),
            field_type,
            required,
        }
    }

    /// Create a single-line text field
    pub fn text(label: &str, required: bool) -> Self {
        Self::new(label, FieldType::Text, required)
    }

    /// Create an email field
    pub fn email(label: &str, required: bool) -> Self {
        Self::new(label, FieldType::Email, required)
    }

    /// Create a multi-line text field
    pub fn textarea(label: &str, required: bool) -> Self {
        Self::new(label, FieldType::Textarea, required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recognized_kinds_parse() {
        assert_eq!("text".parse::<FieldType>().unwrap(), FieldType::Text);
        assert_eq!("email".parse::<FieldType>().unwrap(), FieldType::Email);
        assert_eq!("textarea".parse::<FieldType>().unwrap(), FieldType::Textarea);
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let kind = FieldType::from("date");
        assert_eq!(kind, FieldType::Other("date".to_string()));
        assert_eq!(kind.as_str(), "date");
        assert!(!kind.is_recognized());
    }

    #[test]
    fn test_kind_matching_is_case_sensitive() {
        assert!(!FieldType::from("Text").is_recognized());
    }

    #[test]
    fn test_recognized_list() {
        assert!(FieldType::RECOGNIZED.iter().all(FieldType::is_recognized));
        let recognized = FieldType::RECOGNIZED;
        let names: Vec<&str> = recognized.iter().map(FieldType::as_str).collect();
        assert_eq!(names, vec!["text", "email", "textarea"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldType::Textarea.to_string(), "textarea");
        assert_eq!(FieldType::Other("color".into()).to_string(), "color");
    }

    #[test]
    fn test_field_serializes_type_key() {
        let field = FieldSpec::email("Email", true);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "label": "Email", "type": "email", "required": true })
        );
    }

    #[test]
    fn test_field_deserializes_unknown_type() {
        let json = r#"{"label": "Born", "type": "date", "required": false}"#;
        let field: FieldSpec = serde_json::from_str(json).unwrap();
        assert_eq!(field.field_type, FieldType::Other("date".to_string()));
        assert!(!field.required);
    }

    #[test]
    fn test_field_missing_required_key_fails() {
        let json = r#"{"label": "Name", "type": "text"}"#;
        assert!(serde_json::from_str::<FieldSpec>(json).is_err());
    }

    #[test]
    fn test_shorthand_constructors() {
        assert_eq!(FieldSpec::text("Name", true).field_type, FieldType::Text);
        assert_eq!(FieldSpec::textarea("Message", false).field_type, FieldType::Textarea);
    }
}
