//! Route-guard decisions shared by the guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards are pure functions of the current store and storage snapshot.
//! The components in `components::guards` call these on every change of the
//! auth signal, so a block flag flipping mid-session reroutes immediately.
//! Every redirect replaces the current history entry so the back button
//! cannot return to the gated page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::{GuardConfig, StoredUserPolicy};
use crate::state::auth::{AuthState, ResolvedSession, SessionError, resolve_session};
use crate::util::storage::{self, KeyValueStore};
use crate::util::token::decode_role_hint_unsafe;

/// Terminal views a guard may redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Blocked,
    OutOfService,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Blocked => "/blocked",
            Self::OutOfService => "/out-of-service",
        }
    }
}

/// Result of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected content.
    Allow,
    /// Replace the current history entry with this destination.
    Redirect(Destination),
}

/// Decide `BlockGuard` for a resolved session.
///
/// `isBlockedAll` is checked strictly before `isBlocked`. An absent user is
/// not blocked. The unauthenticated check only runs when
/// `require_authentication` is set.
#[must_use]
pub fn block_outcome(session: &ResolvedSession, config: &GuardConfig) -> GuardOutcome {
    if config.require_authentication && !session.is_authenticated() {
        return GuardOutcome::Redirect(Destination::Login);
    }
    match &session.user {
        Some(user) if user.is_blocked_all => GuardOutcome::Redirect(Destination::OutOfService),
        Some(user) if user.is_blocked => GuardOutcome::Redirect(Destination::Blocked),
        _ => GuardOutcome::Allow,
    }
}

/// Resolve the session and decide `BlockGuard`, applying the stored-user policy
/// when the persisted user record is not JSON.
#[must_use]
pub fn block_guard_outcome(store: &AuthState, persisted: &dyn KeyValueStore, config: &GuardConfig) -> GuardOutcome {
    let session = match resolve_session(store, persisted) {
        Ok(session) => session,
        Err(SessionError::StoredUser { token, source }) => {
            log::warn!("block guard: stored user record is not valid JSON: {source}");
            match config.stored_user_policy {
                StoredUserPolicy::FailClosed => return GuardOutcome::Redirect(Destination::Blocked),
                StoredUserPolicy::FailOpen => ResolvedSession { token, user: None },
            }
        }
    };
    block_outcome(&session, config)
}

/// Decide `AdminRoute` from the raw persisted token.
///
/// The role comes from an unverified decode and only steers navigation.
#[must_use]
pub fn admin_outcome(token: Option<&str>) -> GuardOutcome {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return GuardOutcome::Redirect(Destination::Login);
    };
    match decode_role_hint_unsafe(token) {
        Ok(hint) if hint.is_admin() => GuardOutcome::Allow,
        Ok(_) => GuardOutcome::Redirect(Destination::Home),
        Err(e) => {
            log::warn!("admin route: unreadable access token: {e}");
            GuardOutcome::Redirect(Destination::Login)
        }
    }
}

/// Read the token from persistent storage and decide `AdminRoute`.
#[must_use]
pub fn admin_route_outcome(persisted: &dyn KeyValueStore) -> GuardOutcome {
    let token = persisted.get_item(storage::ACCESS_TOKEN_KEY);
    admin_outcome(token.as_deref())
}
