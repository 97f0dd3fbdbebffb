//! Editor auth sessions
//!
//! Bearer tokens for the web login, held in memory only. Restarting the
//! server logs the editor out, which is acceptable for a single-editor
//! tool. Validation extends the expiry so an active session stays alive.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session for web login
    pub fn create(&self) -> Session {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
        };
        self.sessions
            .write()
            .insert(session.token.clone(), session.clone());
        session
    }

    /// Validate a session token and extend its expiry if valid.
    /// Expired entries are dropped on the way out.
    pub fn validate(&self, token: &str) -> Option<Session> {
        let mut sessions = self.sessions.write();
        let now = Utc::now();
        match sessions.get_mut(token) {
            Some(session) if session.expires_at > now => {
                session.expires_at = now + Duration::hours(SESSION_TTL_HOURS);
                Some(session.clone())
            }
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Delete a session (logout). Returns whether one was removed.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.write().remove(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_validate() {
        let mgr = SessionManager::new();
        let session = mgr.create();
        assert!(mgr.validate(&session.token).is_some());
        assert!(mgr.validate("not-a-token").is_none());
    }

    #[test]
    fn test_revoke() {
        let mgr = SessionManager::new();
        let session = mgr.create();
        assert!(mgr.revoke(&session.token));
        assert!(mgr.validate(&session.token).is_none());
        assert!(!mgr.revoke(&session.token));
    }

    #[test]
    fn test_expired_session_is_rejected_and_dropped() {
        let mgr = SessionManager::new();
        let session = mgr.create();
        mgr.sessions
            .write()
            .get_mut(&session.token)
            .unwrap()
            .expires_at = Utc::now() - Duration::hours(1);

        assert!(mgr.validate(&session.token).is_none());
        assert!(mgr.sessions.read().is_empty());
    }

    #[test]
    fn test_validation_extends_expiry() {
        let mgr = SessionManager::new();
        let session = mgr.create();
        mgr.sessions
            .write()
            .get_mut(&session.token)
            .unwrap()
            .expires_at = Utc::now() + Duration::minutes(5);

        let refreshed = mgr.validate(&session.token).unwrap();
        assert!(refreshed.expires_at > Utc::now() + Duration::hours(23));
    }
}
