use serde::{Deserialize, Serialize};

/// A stored announcement shown on the notice board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// Opaque unique token (uuid v4 for store-created notices).
    #[serde(default)]
    pub id: String,
    /// Announcement body. May contain embedded markup, e.g. the anchor
    /// fragment appended when a link note is mirrored here.
    pub content: String,
    /// Unix timestamp in seconds. Absent on rows migrated from the legacy
    /// plain-text notice file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
}
