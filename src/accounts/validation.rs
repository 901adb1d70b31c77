use lazy_static::lazy_static;
use regex::Regex;

use crate::accounts::error::AccountError;

pub(crate) const REQUIRED_MSG: &str = "Email and password are required";
pub(crate) const EMAIL_MSG: &str = "Please provide a valid email address";
pub(crate) const PASSWORD_RULES_MSG: &str = "Password must be at least 6 characters long and contain at least one uppercase letter, one lowercase letter, one number, and one underscore";
pub(crate) const NEW_PASSWORD_RULES_MSG: &str = "New password must be at least 6 characters long and contain at least one uppercase letter, one lowercase letter, one number, and one underscore";

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Password policy: letters, digits and underscores only, at least 6 chars,
/// with at least one lowercase letter, one uppercase letter, one digit and
/// one underscore. The regex crate has no lookahead, so the class checks are
/// done with plain scans.
pub fn is_valid_password(password: &str) -> bool {
    if password.len() < 6 {
        return false;
    }
    if !password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return false;
    }
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.contains('_')
}

/// Shared precondition for every credential-bearing use case.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AccountError> {
    if email.is_empty() || password.is_empty() {
        return Err(AccountError::Validation(REQUIRED_MSG.into()));
    }
    if !is_valid_email(email) {
        return Err(AccountError::Validation(EMAIL_MSG.into()));
    }
    if !is_valid_password(password) {
        return Err(AccountError::Validation(PASSWORD_RULES_MSG.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user.name@example.com"));
    }

    #[test]
    fn rejects_bad_emails() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
    }

    #[test]
    fn accepts_conforming_password() {
        assert!(is_valid_password("Abc123_"));
        assert!(is_valid_password("Xy9_zz"));
    }

    #[test]
    fn rejects_missing_character_classes() {
        assert!(!is_valid_password("abc123_")); // no uppercase
        assert!(!is_valid_password("ABC123_")); // no lowercase
        assert!(!is_valid_password("Abcdef_")); // no digit
        assert!(!is_valid_password("Abc123")); // no underscore
        assert!(!is_valid_password("Ab1_")); // too short
    }

    #[test]
    fn rejects_characters_outside_class() {
        assert!(!is_valid_password("Abc123_!"));
        assert!(!is_valid_password("Abc 123_"));
    }

    #[test]
    fn validate_credentials_reports_first_failure() {
        let err = validate_credentials("", "Abc123_").unwrap_err();
        assert_eq!(err.to_string(), REQUIRED_MSG);

        let err = validate_credentials("not-an-email", "Abc123_").unwrap_err();
        assert_eq!(err.to_string(), EMAIL_MSG);

        let err = validate_credentials("a@b.co", "weak").unwrap_err();
        assert_eq!(err.to_string(), PASSWORD_RULES_MSG);

        assert!(validate_credentials("a@b.co", "Abc123_").is_ok());
    }
}
