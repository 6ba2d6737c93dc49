//! # Session store adapter
//!
//! Persists the proof-of-login state for the current tab as four keys on a
//! [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | `isLoggedIn` | `"true"` while a session exists, absent otherwise |
//! | `userEmail` | the address entered at login/signup |
//! | `userName` | display name (falls back to the email local part, then `"Guest"`) |
//! | `lastLogin` | ISO-8601 timestamp of the login |
//!
//! [`restore`](SessionStore::restore) is fail-safe rather than fail-open: a
//! stored email that no longer passes the shape check is treated as
//! corruption, the whole session is cleared, and the caller sees "no
//! session". The local record cache lives under a separate key and is never
//! touched by any operation here.

use chrono::Utc;

use crate::keyvalue::KeyValueStore;
use crate::validate::is_valid_email;

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const EMAIL_KEY: &str = "userEmail";
pub const NAME_KEY: &str = "userName";
pub const LAST_LOGIN_KEY: &str = "lastLogin";

/// The restored identity of the logged-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    pub last_login: String,
}

/// Login flag plus identity, persisted in a per-tab storage area.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the session back, or `None` when absent or corrupted.
    pub fn restore(&self) -> Option<SessionUser> {
        if self.storage.get(LOGGED_IN_KEY).as_deref() != Some("true") {
            return None;
        }

        let email = self.storage.get(EMAIL_KEY).unwrap_or_default();
        if !email.is_empty() && !is_valid_email(&email) {
            tracing::warn!("stored session email failed the shape check, forcing logout");
            self.clear();
            return None;
        }

        let name = self.storage.get(NAME_KEY).unwrap_or_default();
        let last_login = self
            .storage
            .get(LAST_LOGIN_KEY)
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        Some(SessionUser {
            email,
            name,
            last_login,
        })
    }

    /// Write all four keys and return the stored identity.
    pub fn persist(&self, email: &str, name: Option<&str>, timestamp: &str) -> SessionUser {
        let name = display_name(email, name);
        self.storage.set(LOGGED_IN_KEY, "true");
        self.storage.set(EMAIL_KEY, email);
        self.storage.set(NAME_KEY, &name);
        self.storage.set(LAST_LOGIN_KEY, timestamp);
        SessionUser {
            email: email.to_string(),
            name,
            last_login: timestamp.to_string(),
        }
    }

    /// Remove exactly the four session keys.
    pub fn clear(&self) {
        self.storage.remove(LOGGED_IN_KEY);
        self.storage.remove(EMAIL_KEY);
        self.storage.remove(NAME_KEY);
        self.storage.remove(LAST_LOGIN_KEY);
    }
}

/// Provided name → email local part → `"Guest"`.
fn display_name(email: &str, name: Option<&str>) -> String {
    if let Some(name) = name {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() {
        "Guest".to_string()
    } else {
        local.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LOCAL_STUDENTS_KEY;
    use crate::keyvalue::MemoryStore;

    fn store() -> (SessionStore<MemoryStore>, MemoryStore) {
        let area = MemoryStore::new();
        (SessionStore::new(area.clone()), area)
    }

    #[test]
    fn absent_flag_is_no_session() {
        let (session, _) = store();
        assert!(session.restore().is_none());
    }

    #[test]
    fn persist_then_restore_round_trips() {
        let (session, _) = store();
        session.persist("jane@example.com", Some("Jane Doe"), "2025-07-24T09:27:00Z");
        let user = session.restore().unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.last_login, "2025-07-24T09:27:00Z");
    }

    #[test]
    fn name_defaults_to_local_part_then_guest() {
        let (session, _) = store();
        let user = session.persist("jane@example.com", None, "t");
        assert_eq!(user.name, "jane");
        let user = session.persist("jane@example.com", Some("  "), "t");
        assert_eq!(user.name, "jane");
        let user = session.persist("", None, "t");
        assert_eq!(user.name, "Guest");
    }

    #[test]
    fn corrupted_email_clears_all_four_keys() {
        let (session, area) = store();
        session.persist("jane@example.com", None, "t");
        area.set(EMAIL_KEY, "not-an-email");

        assert!(session.restore().is_none());
        assert!(area.get(LOGGED_IN_KEY).is_none());
        assert!(area.get(EMAIL_KEY).is_none());
        assert!(area.get(NAME_KEY).is_none());
        assert!(area.get(LAST_LOGIN_KEY).is_none());
    }

    #[test]
    fn clear_leaves_the_record_cache_alone() {
        let (session, area) = store();
        session.persist("jane@example.com", None, "t");
        area.set(LOCAL_STUDENTS_KEY, "[]");

        session.clear();
        assert!(session.restore().is_none());
        assert_eq!(area.get(LOCAL_STUDENTS_KEY).as_deref(), Some("[]"));
        assert_eq!(area.len(), 1);
    }

    #[test]
    fn missing_last_login_defaults_to_now() {
        let (session, area) = store();
        area.set(LOGGED_IN_KEY, "true");
        area.set(EMAIL_KEY, "jane@example.com");
        let user = session.restore().unwrap();
        assert!(!user.last_login.is_empty());
    }
}
