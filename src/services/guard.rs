//! Route guard: admin gate over the route table

use crate::{
    models::route::{self, GUARD_FALLBACK_PATH},
    store::SessionStore,
};

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation may proceed.
    Allow,
    /// Navigation is denied; redirect to the contained path.
    Redirect(&'static str),
}

/// Evaluates the single gating rule before each navigation: a route flagged
/// admin-only is only reachable while the session role is admin; everything
/// else passes through. Stateless aside from reading the session slot.
#[derive(Clone)]
pub struct RouteGuard {
    session: SessionStore,
}

impl RouteGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Decide whether navigation to `path` may proceed.
    pub fn decide(&self, path: &str) -> GuardDecision {
        let requires_admin = route::find_rule(path)
            .map(|rule| rule.requires_admin)
            .unwrap_or(false);

        if requires_admin && !self.session.is_admin() {
            tracing::debug!(path, "Guard: denied, redirecting to {}", GUARD_FALLBACK_PATH);
            GuardDecision::Redirect(GUARD_FALLBACK_PATH)
        } else {
            GuardDecision::Allow
        }
    }
}
