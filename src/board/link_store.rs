//! LinkStore — JSON-file-backed bookmark collection
//!
//! The collection is an ordered JSON array rewritten whole on every
//! mutation (pretty-printed, UTF-8, non-ASCII left unescaped so the file
//! stays hand-editable). A corrupt or missing file degrades to an empty
//! collection rather than failing the request.

use std::path::PathBuf;

use crate::board::file_ops;
use crate::models::{Link, NewLink, StoreError};

pub struct LinkStore {
    path: PathBuf,
}

impl LinkStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Current collection, in insertion order.
    ///
    /// Records that lost their `id` (e.g. a hand-edited file) are assigned
    /// `max+1` in iteration order and the repaired file is written back.
    pub fn list(&self) -> Vec<Link> {
        let mut links = self.load();
        if heal_ids(&mut links) {
            if let Err(e) = self.save(&links) {
                log::warn!("[LINKS] Failed to persist id repair: {}", e);
            } else {
                log::info!("[LINKS] Repaired missing link ids in {:?}", self.path);
            }
        }
        links
    }

    /// Create a link. `url` and `title` are required; the rest default to
    /// empty. The new id is `max(existing) + 1`.
    pub fn create(&self, fields: NewLink) -> Result<Link, StoreError> {
        let url = fields.url.trim().to_string();
        let title = fields.title.trim().to_string();
        if url.is_empty() {
            return Err(StoreError::Validation("url is required".to_string()));
        }
        if title.is_empty() {
            return Err(StoreError::Validation("title is required".to_string()));
        }

        let mut links = self.list();
        let link = Link {
            id: next_id(&links),
            url,
            title,
            description: fields.description.trim().to_string(),
            image: fields.image.trim().to_string(),
            favicon: fields.favicon.trim().to_string(),
            note: fields.note.trim().to_string(),
        };
        links.push(link.clone());
        self.save(&links)?;
        Ok(link)
    }

    /// Replace the note of the link with the given id.
    pub fn update_note(&self, id: i64, note: &str) -> Result<Link, StoreError> {
        let mut links = self.list();
        let Some(link) = links.iter_mut().find(|l| l.id == id) else {
            return Err(StoreError::NotFound(format!("link {}", id)));
        };
        link.note = note.trim().to_string();
        let updated = link.clone();
        self.save(&links)?;
        Ok(updated)
    }

    /// Remove the link with the given id, preserving the order of the rest.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut links = self.list();
        let before = links.len();
        links.retain(|l| l.id != id);
        if links.len() == before {
            return Err(StoreError::NotFound(format!("link {}", id)));
        }
        self.save(&links)?;
        Ok(())
    }

    fn load(&self) -> Vec<Link> {
        let raw = match file_ops::read_text(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("[LINKS] Failed to read {:?}: {} - treating as empty", self.path, e);
                return Vec::new();
            }
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&raw) {
            Ok(links) => links,
            Err(e) => {
                log::warn!("[LINKS] Corrupt links file {:?}: {} - treating as empty", self.path, e);
                Vec::new()
            }
        }
    }

    fn save(&self, links: &[Link]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(links)
            .map_err(|e| StoreError::Storage(format!("serialize links: {}", e)))?;
        file_ops::write_text(&self.path, &json)
            .map_err(|e| StoreError::Storage(format!("write {:?}: {}", self.path, e)))
    }
}

fn next_id(links: &[Link]) -> i64 {
    links.iter().map(|l| l.id).max().unwrap_or(0).max(0) + 1
}

/// Assign ids to any records missing one. Returns whether anything changed.
fn heal_ids(links: &mut [Link]) -> bool {
    let mut next = links.iter().map(|l| l.id).max().unwrap_or(0).max(0) + 1;
    let mut changed = false;
    for link in links.iter_mut() {
        if !link.has_id() {
            link.id = next;
            next += 1;
            changed = true;
        }
    }
    changed
}
