//! NoticeStore — JSON-file-backed notice board
//!
//! The notices file is either a JSON array of notice objects or, in the
//! legacy encoding, one raw announcement as plain text. The legacy form is
//! migrated in place on first load: the trimmed text becomes the `content`
//! of a single synthesized notice, written back immediately so the
//! generated id stays stable across loads.

use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use crate::board::file_ops;
use crate::models::{Notice, StoreError};

pub struct NoticeStore {
    path: PathBuf,
}

impl NoticeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Current notices, oldest first. Absent or empty file reads as empty.
    pub fn list(&self) -> Vec<Notice> {
        let raw = match file_ops::read_text(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("[NOTICE] Failed to read {:?}: {} - treating as empty", self.path, e);
                return Vec::new();
            }
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        if let Ok(notices) = serde_json::from_str::<Vec<Notice>>(trimmed) {
            return notices;
        }

        // Legacy encoding: the whole file is one announcement.
        let migrated = vec![Notice {
            id: Uuid::new_v4().to_string(),
            content: trimmed.to_string(),
            created_at: None,
        }];
        match self.save(&migrated) {
            Ok(()) => log::info!("[NOTICE] Migrated legacy notice file {:?}", self.path),
            Err(e) => log::warn!("[NOTICE] Failed to persist legacy migration: {}", e),
        }
        migrated
    }

    /// Append a notice with a fresh id and the current timestamp.
    pub fn add(&self, content: &str) -> Result<Notice, StoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::Validation("notice content is required".to_string()));
        }

        let mut notices = self.list();
        let notice = Notice {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            created_at: Some(unix_now()),
        };
        notices.push(notice.clone());
        self.save(&notices)?;
        Ok(notice)
    }

    /// Remove the notice with the given id.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut notices = self.list();
        let before = notices.len();
        notices.retain(|n| n.id != id);
        if notices.len() == before {
            return Err(StoreError::NotFound(format!("notice {}", id)));
        }
        self.save(&notices)?;
        Ok(())
    }

    /// Replace the board with an empty list, unconditionally.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&[])
    }

    fn save(&self, notices: &[Notice]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(notices)
            .map_err(|e| StoreError::Storage(format!("serialize notices: {}", e)))?;
        file_ops::write_text(&self.path, &json)
            .map_err(|e| StoreError::Storage(format!("write {:?}: {}", self.path, e)))
    }
}

/// Unix timestamp in seconds, with sub-second precision.
fn unix_now() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
