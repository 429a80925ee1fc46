// Blog API response types.
// Defines the post record returned by the remote collection endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single blog article as served by the remote collection.
///
/// Fields the remote adds beyond the known ones are kept in `extra` and
/// written back out unchanged when the post is serialized again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// Timestamp string exactly as the remote sent it.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlogPost {
    /// Create a post with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at: created_at.into(),
            image: None,
            preview: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// Parse `created_at` as RFC 3339 for display. The raw string stays authoritative.
    pub fn created_at_parsed(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Look up an untyped extra field.
    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Short one-line summary used by the CLI listing.
    pub fn summary(&self) -> String {
        match self.created_at_parsed() {
            Some(dt) => format!("[{}] {} ({})", self.id, self.title, dt.format("%Y-%m-%d")),
            None => format!("[{}] {}", self.id, self.title),
        }
    }
}
