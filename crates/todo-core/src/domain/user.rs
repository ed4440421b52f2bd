//! User Entity
//!
//! Users are identified by their normalized email address.

use serde::{Deserialize, Serialize};

use super::error::{TodoError, TodoResult};

/// Lower-case and trim an email so it can be used as a user key
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Email/password pair as submitted by a login or register form
///
/// The password is kept verbatim; it is never trimmed or hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw form input
    ///
    /// Fails when either field is empty after normalization.
    pub fn from_form(email: &str, password: &str) -> TodoResult<Self> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(TodoError::validation(
                "credentials",
                "Please enter both email and password.",
            ));
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
    }

    #[test]
    fn test_credentials_keep_password_verbatim() {
        let creds = Credentials::from_form(" Me@Example.com", " secret ").unwrap();
        assert_eq!(creds.email, "me@example.com");
        assert_eq!(creds.password, " secret ");
    }

    #[test]
    fn test_credentials_require_both_fields() {
        assert!(Credentials::from_form("   ", "pw").is_err());
        let err = Credentials::from_form("a@x.com", "").unwrap_err();
        assert_eq!(err.to_string(), "Please enter both email and password.");
    }
}
