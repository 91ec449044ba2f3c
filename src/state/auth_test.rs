use super::*;
use crate::util::storage::{ACCESS_TOKEN_KEY, MemoryStorage, USER_KEY};

fn blocked_user() -> SessionUser {
    SessionUser { is_blocked: true, ..SessionUser::default() }
}

// =============================================================
// Token resolution
// =============================================================

#[test]
fn store_token_takes_precedence_over_storage() {
    let store = AuthState { access_token: Some("from-store".to_owned()), user: None };
    let persisted = MemoryStorage::with_items([(ACCESS_TOKEN_KEY, "from-storage")]);
    let session = resolve_session(&store, &persisted).unwrap();
    assert_eq!(session.token.as_deref(), Some("from-store"));
    assert!(session.is_authenticated());
}

#[test]
fn empty_store_token_falls_back_to_storage() {
    let store = AuthState { access_token: Some(String::new()), user: None };
    let persisted = MemoryStorage::with_items([(ACCESS_TOKEN_KEY, "from-storage")]);
    let session = resolve_session(&store, &persisted).unwrap();
    assert_eq!(session.token.as_deref(), Some("from-storage"));
}

#[test]
fn missing_token_everywhere_resolves_to_none() {
    let session = resolve_session(&AuthState::default(), &MemoryStorage::new()).unwrap();
    assert_eq!(session, ResolvedSession::default());
    assert!(!session.is_authenticated());
}

// =============================================================
// User resolution
// =============================================================

#[test]
fn store_user_takes_precedence_and_storage_is_not_parsed() {
    let store = AuthState { access_token: None, user: Some(blocked_user()) };
    let persisted = MemoryStorage::with_items([(USER_KEY, "{not json")]);
    let session = resolve_session(&store, &persisted).unwrap();
    assert_eq!(session.user, Some(blocked_user()));
}

#[test]
fn stored_user_parses_camel_case_flags() {
    let persisted = MemoryStorage::with_items([(
        USER_KEY,
        r#"{"isBlocked":false,"isBlockedAll":true,"role":"student","name":"Ada"}"#,
    )]);
    let session = resolve_session(&AuthState::default(), &persisted).unwrap();
    let user = session.user.unwrap();
    assert!(user.is_blocked_all);
    assert!(!user.is_blocked);
    assert_eq!(user.role.as_deref(), Some("student"));
    assert_eq!(user.name.as_deref(), Some("Ada"));
}

#[test]
fn stored_user_missing_flags_default_to_unblocked() {
    let persisted = MemoryStorage::with_items([(USER_KEY, r#"{"name":"Ada"}"#)]);
    let user = resolve_session(&AuthState::default(), &persisted).unwrap().user.unwrap();
    assert!(!user.is_blocked);
    assert!(!user.is_blocked_all);
}

#[test]
fn stored_null_user_resolves_to_none() {
    let persisted = MemoryStorage::with_items([(USER_KEY, "null")]);
    let session = resolve_session(&AuthState::default(), &persisted).unwrap();
    assert_eq!(session.user, None);
}

#[test]
fn malformed_stored_user_is_reported_with_resolved_token() {
    let persisted = MemoryStorage::with_items([(USER_KEY, "{not json"), (ACCESS_TOKEN_KEY, "tok")]);
    let err = resolve_session(&AuthState::default(), &persisted).unwrap_err();
    let SessionError::StoredUser { token, .. } = err;
    assert_eq!(token.as_deref(), Some("tok"));
}

// =============================================================
// Lenient field reading
// =============================================================

#[test]
fn null_sibling_flag_does_not_hide_blocked_all() {
    let persisted = MemoryStorage::with_items([(USER_KEY, r#"{"isBlockedAll":true,"isBlocked":null,"role":"student"}"#)]);
    let user = resolve_session(&AuthState::default(), &persisted).unwrap().user.unwrap();
    assert!(user.is_blocked_all);
    assert!(!user.is_blocked);
    assert_eq!(user.role.as_deref(), Some("student"));
}

#[test]
fn non_string_role_reads_as_absent() {
    let persisted = MemoryStorage::with_items([(USER_KEY, r#"{"isBlocked":true,"role":{"name":"student"}}"#)]);
    let user = resolve_session(&AuthState::default(), &persisted).unwrap().user.unwrap();
    assert!(user.is_blocked);
    assert_eq!(user.role, None);
}

#[test]
fn flags_follow_json_truthiness() {
    let cases = [
        (r#"{"isBlocked":1}"#, true),
        (r#"{"isBlocked":0}"#, false),
        (r#"{"isBlocked":"yes"}"#, true),
        (r#"{"isBlocked":""}"#, false),
        (r#"{"isBlocked":{}}"#, true),
        (r#"{"isBlocked":false}"#, false),
    ];
    for (raw, expected) in cases {
        let user: SessionUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.is_blocked, expected, "record {raw}");
    }
}

#[test]
fn non_object_stored_user_has_no_flags() {
    for raw in ["42", r#""admin""#, "[true]"] {
        let persisted = MemoryStorage::with_items([(USER_KEY, raw)]);
        let user = resolve_session(&AuthState::default(), &persisted).unwrap().user;
        assert_eq!(user, Some(SessionUser::default()), "record {raw}");
    }
}
