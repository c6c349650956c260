//! Style - Named response style records
//!
//! A style pairs a unique name with a description of how responses
//! should read. Descriptions are stored wrapped in the fixed
//! `<response-style>` tag template so they can be pasted directly
//! into an LLM prompt prefix.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named response style
///
/// Field names serialize as camelCase to match the on-disk collection
/// format and the HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub id: i64,
    /// Unique human-readable name (case-sensitive)
    pub name: String,
    /// Description wrapped in the response-style tag template
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wrap a description in the response-style tag template.
///
/// Applied unconditionally on every create and update: a value that
/// already carries the tags is wrapped again.
pub fn wrap_description(description: &str) -> String {
    format!("<response-style>{}</response-style>", description)
}

impl Style {
    /// Create a new style with a wrapped description and both
    /// timestamps set to now
    pub fn new(id: i64, name: impl Into<String>, description: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            description: wrap_description(description),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace name and description, bumping `updated_at`.
    ///
    /// `id` and `created_at` are preserved.
    pub fn apply_update(&mut self, name: impl Into<String>, description: &str) {
        self.name = name.into();
        self.description = wrap_description(description);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wraps_description() {
        let style = Style::new(1, "Formal", "Be concise.");
        assert_eq!(
            style.description,
            "<response-style>Be concise.</response-style>"
        );
        assert_eq!(style.created_at, style.updated_at);
    }

    #[test]
    fn test_update_rewraps_wrapped_value() {
        let mut style = Style::new(1, "Formal", "hello");
        let stored = style.description.clone();
        style.apply_update("Formal", &stored);
        assert_eq!(
            style.description,
            "<response-style><response-style>hello</response-style></response-style>"
        );
    }

    #[test]
    fn test_update_preserves_identity_fields() {
        let mut style = Style::new(7, "Formal", "Be concise.");
        let created = style.created_at;
        let before = style.updated_at;
        style.apply_update("Casual", "Be relaxed.");
        assert_eq!(style.id, 7);
        assert_eq!(style.created_at, created);
        assert!(style.updated_at >= before);
        assert_eq!(style.name, "Casual");
    }

    #[test]
    fn test_serializes_camel_case() {
        let style = Style::new(1, "Formal", "Be concise.");
        let json = serde_json::to_value(&style).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
