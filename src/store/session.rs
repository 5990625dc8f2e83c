//! In-memory session slot

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::user::{Role, SessionUser};

/// Holds at most one authenticated user for the lifetime of the process.
/// No persistence, no expiry, no refresh. All operations are total.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<SessionUser>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the session user unconditionally. Subsequent authorization
    /// checks reflect the new role immediately.
    pub fn set_user(&self, user: SessionUser) {
        *self.write() = Some(user);
    }

    /// Clear the session. Idempotent.
    pub fn clear(&self) {
        *self.write() = None;
    }

    /// Snapshot of the current session user, if any.
    pub fn current(&self) -> Option<SessionUser> {
        self.read().clone()
    }

    /// True iff a user is present and its role is admin.
    pub fn is_admin(&self) -> bool {
        self.read()
            .as_ref()
            .map(|u| u.role == Role::Admin)
            .unwrap_or(false)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<SessionUser>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<SessionUser>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> SessionUser {
        SessionUser {
            username: "admin".to_string(),
            email: Some("admin@example.org".to_string()),
            role: Role::Admin,
        }
    }

    fn reader() -> SessionUser {
        SessionUser {
            username: "user".to_string(),
            email: None,
            role: Role::User,
        }
    }

    #[test]
    fn is_admin_reflects_the_current_role() {
        let store = SessionStore::new();
        assert!(!store.is_admin());

        store.set_user(admin());
        assert!(store.is_admin());

        store.set_user(reader());
        assert!(!store.is_admin());
    }

    #[test]
    fn relogin_replaces_the_session() {
        let store = SessionStore::new();
        store.set_user(reader());
        store.set_user(admin());

        let current = store.current().expect("session present");
        assert_eq!(current.username, "admin");
        assert_eq!(current.role, Role::Admin);
    }

    #[test]
    fn logout_clears_and_is_idempotent() {
        let store = SessionStore::new();
        store.set_user(admin());

        store.clear();
        assert!(store.current().is_none());
        assert!(!store.is_admin());

        // Second clear is a no-op
        store.clear();
        assert!(store.current().is_none());
    }
}
