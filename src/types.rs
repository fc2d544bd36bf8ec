//! Common types used throughout restpager
//!
//! Records flowing through the client, the form used to create new ones,
//! and the small enums that select navigation behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Records
// ============================================================================

/// Age as sent by the server: free-form text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Age {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Number(n) => write!(f, "{n}"),
            Age::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Age {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Age {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for Age {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// A record in the remote collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned identifier (not used for navigation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Age,
    #[serde(default)]
    pub description: String,
}

/// Body of a creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub age: Age,
    pub description: String,
}

impl NewRecord {
    /// Create a new record payload
    pub fn new(
        name: impl Into<String>,
        age: impl Into<Age>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            description: description.into(),
        }
    }
}

/// Input form for new records
///
/// Holds raw user input until submission. The form is reset after every
/// submission attempt, whether or not the server accepted it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub name: String,
    pub age: String,
    pub description: String,
}

impl RecordForm {
    /// Build the creation payload from the current input
    pub fn to_record(&self) -> NewRecord {
        NewRecord::new(
            self.name.as_str(),
            self.age.as_str(),
            self.description.as_str(),
        )
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if every field is empty
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.age.is_empty() && self.description.is_empty()
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Which way the user asked to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// How adjacent pages are located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// Compute `?limit&page` from a local counter
    #[serde(alias = "page_numbered")]
    #[value(alias = "page-numbered")]
    Page,
    /// Follow `next`/`prev` URLs from the response `link` header
    #[default]
    #[serde(alias = "link_driven")]
    #[value(alias = "link-driven")]
    Link,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserialize_numeric_age() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "name": "Zorg",
            "age": 123.5,
            "description": "large"
        }))
        .unwrap();

        assert_eq!(record.id, Some(json!(7)));
        assert_eq!(record.name, "Zorg");
        assert_eq!(record.age.to_string(), "123.5");
    }

    #[test]
    fn test_record_deserialize_text_age() {
        let record: Record =
            serde_json::from_value(json!({"name": "Blob", "age": "old", "description": ""}))
                .unwrap();
        assert_eq!(record.age, Age::Text("old".to_string()));
        assert!(record.id.is_none());
    }

    #[test]
    fn test_new_record_serializes_three_fields() {
        let record = NewRecord::new("Blob", "12", "green");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"name": "Blob", "age": "12", "description": "green"})
        );
    }

    #[test]
    fn test_form_reset() {
        let mut form = RecordForm {
            name: "a".into(),
            age: "1".into(),
            description: "d".into(),
        };
        assert!(!form.is_empty());
        assert_eq!(form.to_record().age, Age::from("1"));

        form.reset();
        assert!(form.is_empty());
    }

    #[test]
    fn test_navigation_mode_yaml() {
        let mode: NavigationMode = serde_yaml::from_str("page").unwrap();
        assert_eq!(mode, NavigationMode::Page);
        let mode: NavigationMode = serde_yaml::from_str("link_driven").unwrap();
        assert_eq!(mode, NavigationMode::Link);
        assert_eq!(NavigationMode::default(), NavigationMode::Link);
    }
}
