use serde::{Deserialize, Serialize};

/// A stored bookmark record with display metadata.
///
/// Serialized shape matches the on-disk links file: a pretty-printed JSON
/// array of these objects. `favicon` is omitted when empty so deployments
/// whose file never carried the key keep their exact shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Unique positive integer, assigned monotonically by the store.
    /// Records loaded without one (deserialized as 0) are repaired on load.
    #[serde(default)]
    pub id: i64,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub favicon: String,
    #[serde(default)]
    pub note: String,
}

impl Link {
    pub fn has_id(&self) -> bool {
        self.id > 0
    }
}

/// Fields for creating a link, as posted by the board UI.
/// Validated by the store before anything is persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewLink {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub favicon: String,
    #[serde(default)]
    pub note: String,
}
