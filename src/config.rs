//! Build-time configuration for guards and REST access.
//!
//! A browser bundle has no process environment, so values are captured from
//! the build environment with `option_env!`. Invalid values fall back to the
//! defaults with a warning rather than failing the bundle at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
    #[error("unknown stored-user policy '{0}' (expected 'fail-open' or 'fail-closed')")]
    InvalidPolicy(String),
}

/// What `BlockGuard` does when the persisted user record cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoredUserPolicy {
    /// Treat the user as absent, which lets the route render.
    #[default]
    FailOpen,
    /// Send the user to the blocked page.
    FailClosed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardConfig {
    /// Redirect to `/login` from `BlockGuard` when no token resolves.
    pub require_authentication: bool,
    pub stored_user_policy: StoredUserPolicy,
}

impl GuardConfig {
    /// Build from `COURSEHUB_REQUIRE_AUTH` and `COURSEHUB_STORED_USER_POLICY`.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("COURSEHUB_REQUIRE_AUTH"), option_env!("COURSEHUB_STORED_USER_POLICY"))
    }

    fn from_values(require_auth: Option<&str>, policy: Option<&str>) -> Self {
        let require_authentication = parse_bool("COURSEHUB_REQUIRE_AUTH", require_auth).unwrap_or_else(|e| {
            log::warn!("{e}; defaulting to false");
            false
        });
        let stored_user_policy = parse_policy(policy).unwrap_or_else(|e| {
            log::warn!("{e}; defaulting to fail-open");
            StoredUserPolicy::FailOpen
        });
        Self { require_authentication, stored_user_policy }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for REST paths; empty means same-origin.
    pub base_url: String,
}

impl ApiConfig {
    /// Build from `COURSEHUB_API_BASE`.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("COURSEHUB_API_BASE"))
    }

    fn from_value(raw: Option<&str>) -> Self {
        let base_url = raw.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Join `path` (starting with `/`) onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn parse_bool(var: &'static str, raw: Option<&str>) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" => Ok(false),
        "true" | "1" | "yes" => Ok(true),
        _ => Err(ConfigError::InvalidBool { var, value: value.to_owned() }),
    }
}

fn parse_policy(raw: Option<&str>) -> Result<StoredUserPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("fail-open") {
        "" | "fail-open" => Ok(StoredUserPolicy::FailOpen),
        "fail-closed" => Ok(StoredUserPolicy::FailClosed),
        other => Err(ConfigError::InvalidPolicy(other.to_owned())),
    }
}
