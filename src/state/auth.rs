//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the central store slice, provided once by `App` as an
//! `RwSignal` and written only by the login/logout flows. Route guards read it
//! through [`resolve_session`], which falls back to the persistent storage
//! mirror for any field the store has not been populated with yet (for
//! example right after a page reload).
//!
//! Fallback order, per field: central store, then persistent storage, then
//! absent. Each source is read at most once per call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::storage::{self, KeyValueStore};

/// The authenticated user's record as issued by the API.
///
/// Every field is read leniently: a flag is set only when its JSON value is
/// truthy, and a text field of the wrong type reads as absent. One odd field
/// never hides a block flag set next to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Partial restriction: the user may not use course pages.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_blocked: bool,
    /// Full restriction: the whole service is closed to this user.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_blocked_all: bool,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: Option<String>,
}

impl SessionUser {
    /// Read a user from an arbitrary JSON value.
    ///
    /// `null` is no user. A non-object value is a user with no flags set.
    #[must_use]
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            value @ serde_json::Value::Object(_) => Some(serde_json::from_value(value).unwrap_or_default()),
            _ => Some(Self::default()),
        }
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Central store slice for authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
}

/// Session facts after reconciling the store with persistent storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSession {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl ResolvedSession {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The stored `"user"` text is not JSON. The token was still resolved.
    #[error("stored user record is not valid JSON: {source}")]
    StoredUser { token: Option<String>, source: serde_json::Error },
}

/// Reconcile the central store with persistent storage.
///
/// An empty token string counts as absent. A stored `"user"` value of `null`
/// resolves to no user.
///
/// # Errors
///
/// Returns [`SessionError::StoredUser`] when the store has no user and the
/// stored `"user"` text is not JSON at all. The error carries the resolved
/// token so callers can apply their own policy without re-reading storage.
pub fn resolve_session(store: &AuthState, persisted: &dyn KeyValueStore) -> Result<ResolvedSession, SessionError> {
    let token = resolve_token(store, persisted);
    match resolve_user(store, persisted) {
        Ok(user) => Ok(ResolvedSession { token, user }),
        Err(source) => Err(SessionError::StoredUser { token, source }),
    }
}

fn resolve_token(store: &AuthState, persisted: &dyn KeyValueStore) -> Option<String> {
    store
        .access_token
        .clone()
        .filter(|t| !t.is_empty())
        .or_else(|| storage::get_non_empty(persisted, storage::ACCESS_TOKEN_KEY))
}

fn resolve_user(store: &AuthState, persisted: &dyn KeyValueStore) -> Result<Option<SessionUser>, serde_json::Error> {
    if let Some(user) = &store.user {
        return Ok(Some(user.clone()));
    }
    match persisted.get_item(storage::USER_KEY) {
        Some(raw) => Ok(SessionUser::from_json(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
