//! GitHub login validation.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum length of a GitHub login.
pub const MAX_USERNAME_LEN: usize = 39;

/// Letters, digits and hyphens. Older accounts may have leading, trailing or
/// doubled hyphens, so hyphen placement is left to GitHub.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

/// Validates a GitHub username before it is sent upstream.
///
/// # Rules
///
/// - Length: 1-39 characters
/// - Allowed characters: ASCII letters, digits, hyphens
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if username.is_empty() {
        return Err(AppError::bad_request(
            "Username must not be empty",
            json!({ "username": username }),
        ));
    }

    if username.len() > MAX_USERNAME_LEN {
        return Err(AppError::bad_request(
            format!("Username must be at most {MAX_USERNAME_LEN} characters"),
            json!({ "username": username, "length": username.len() }),
        ));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(AppError::bad_request(
            "Username may only contain letters, digits and hyphens",
            json!({ "username": username }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in [
            "octocat", "a", "rust-lang", "User123", "a-b-c", "octocat-", "octo--cat", "-",
        ] {
            assert!(validate_username(name).is_ok(), "{name} should be valid");
        }
        assert!(validate_username(&"a".repeat(39)).is_ok());
    }

    #[test]
    fn test_empty_username() {
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_too_long_username() {
        assert!(validate_username(&"a".repeat(40)).is_err());
    }

    #[test]
    fn test_invalid_characters() {
        for name in [
            "octo cat", "octo/cat", "octo_cat", "..", "octo.cat", "ünïcode",
        ] {
            assert!(validate_username(name).is_err(), "{name} should be invalid");
        }
    }
}
