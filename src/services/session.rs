//! Session management service

use crate::{
    models::user::SessionUser,
    store::SessionStore,
};

#[derive(Clone)]
pub struct SessionService {
    store: SessionStore,
}

impl SessionService {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Replace the session with the given user. Re-login simply overwrites.
    pub fn login(&self, user: SessionUser) -> SessionUser {
        tracing::info!(username = %user.username, role = %user.role, "Session: login");
        self.store.set_user(user.clone());
        user
    }

    /// Clear the session. Idempotent.
    pub fn logout(&self) {
        tracing::info!("Session: logout");
        self.store.clear();
    }

    /// Current session user, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.store.current()
    }

    /// True iff the current session user has the admin role.
    pub fn is_admin(&self) -> bool {
        self.store.is_admin()
    }
}
