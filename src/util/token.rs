//! Client-side bearer token inspection.
//!
//! SECURITY
//! ========
//! Nothing here verifies a signature. The decoded role is a routing hint so
//! the UI can skip screens the user will be refused anyway; every admin API
//! call is still authorized by the server. Do not use these values to make
//! trust decisions.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Roles that may see admin routes.
pub const ADMIN_ROLES: [&str; 2] = ["admin", "superadmin"];

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("expected 3 dot-separated segments, found {0}")]
    SegmentCount(usize),
    #[error("claims segment is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("claims segment is not JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unverified claims read from a token payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleHint {
    /// The `role` claim when present and a string.
    pub role: Option<String>,
}

impl RoleHint {
    /// Whether the hinted role is allowed onto admin routes.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| ADMIN_ROLES.contains(&role))
    }
}

/// Decode the claims segment of `token` without verifying it.
///
/// The payload may use either the URL-safe or the standard base64 alphabet,
/// padded or not. A payload that is valid JSON but not an object, or lacks a
/// string `role`, yields a hint with no role.
///
/// # Errors
///
/// Returns [`TokenError`] when the token does not have three segments or the
/// claims segment is not base64-encoded JSON.
pub fn decode_role_hint_unsafe(token: &str) -> Result<RoleHint, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::SegmentCount(segments.len()));
    }
    let payload = segments[1];
    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes)?;
    let role = claims
        .get("role")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);
    Ok(RoleHint { role })
}
