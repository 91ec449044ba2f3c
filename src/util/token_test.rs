use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use super::*;

fn token_with_claims(claims: &serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("header.{payload}.signature")
}

#[test]
fn decodes_role_from_url_safe_payload() {
    let token = token_with_claims(&serde_json::json!({ "role": "admin", "sub": "u1" }));
    let hint = decode_role_hint_unsafe(&token).unwrap();
    assert_eq!(hint.role.as_deref(), Some("admin"));
    assert!(hint.is_admin());
}

#[test]
fn decodes_padded_standard_payload() {
    let payload = STANDARD.encode(r#"{"role":"superadmin","n":"??>"}"#);
    let token = format!("h.{payload}.s");
    let hint = decode_role_hint_unsafe(&token).unwrap();
    assert!(hint.is_admin());
}

#[test]
fn student_role_is_not_admin() {
    let token = token_with_claims(&serde_json::json!({ "role": "student" }));
    let hint = decode_role_hint_unsafe(&token).unwrap();
    assert_eq!(hint.role.as_deref(), Some("student"));
    assert!(!hint.is_admin());
}

#[test]
fn role_match_is_case_sensitive() {
    let token = token_with_claims(&serde_json::json!({ "role": "Admin" }));
    assert!(!decode_role_hint_unsafe(&token).unwrap().is_admin());
}

#[test]
fn missing_or_non_string_role_yields_empty_hint() {
    let no_role = token_with_claims(&serde_json::json!({ "sub": "u1" }));
    assert_eq!(decode_role_hint_unsafe(&no_role).unwrap(), RoleHint::default());

    let numeric = token_with_claims(&serde_json::json!({ "role": 7 }));
    assert_eq!(decode_role_hint_unsafe(&numeric).unwrap().role, None);

    let array = token_with_claims(&serde_json::json!(["admin"]));
    assert!(!decode_role_hint_unsafe(&array).unwrap().is_admin());
}

#[test]
fn not_a_jwt_is_rejected_by_segment_count() {
    assert!(matches!(decode_role_hint_unsafe("not-a-jwt"), Err(TokenError::SegmentCount(1))));
    assert!(matches!(decode_role_hint_unsafe("a.b"), Err(TokenError::SegmentCount(2))));
    assert!(matches!(decode_role_hint_unsafe("a.b.c.d"), Err(TokenError::SegmentCount(4))));
}

#[test]
fn invalid_base64_payload_is_rejected() {
    assert!(matches!(decode_role_hint_unsafe("h.!!!!.s"), Err(TokenError::Base64(_))));
}

#[test]
fn non_json_payload_is_rejected() {
    let payload = URL_SAFE_NO_PAD.encode("role=admin");
    let token = format!("h.{payload}.s");
    assert!(matches!(decode_role_hint_unsafe(&token), Err(TokenError::Json(_))));
}
