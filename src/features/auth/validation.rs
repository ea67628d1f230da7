//! Local form checks that run before any request is sent. They give early
//! feedback only; the backend remains the authority on password rules.

use super::types::{LoginRequest, SignupRequest};
use crate::app_lib::AppError;
use regex::Regex;
use secrecy::SecretString;

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Basic `local@domain.tld` shape check.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|regex| regex.is_match(email))
}

/// At least eight UTF-16 code units with an uppercase ASCII letter and a
/// digit. Length is measured the way browser form fields count it.
pub fn valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Values are sent exactly as typed.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] when either field is blank.
    pub fn validate(&self) -> Result<LoginRequest, AppError> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(AppError::Validation(
                "Email and password are required.".to_string(),
            ));
        }
        Ok(LoginRequest {
            email: self.email.clone(),
            password: SecretString::from(self.password.clone()),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Checks run in order: required fields, email shape, password strength,
    /// confirmation match. The first failure wins.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] with the message to show.
    pub fn validate(&self) -> Result<SignupRequest, AppError> {
        if self.full_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(AppError::Validation("All fields are required".to_string()));
        }

        if !valid_email(&self.email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }

        if !valid_password(&self.password) {
            return Err(AppError::Validation(
                "Password must be at least 8 characters, include a number and uppercase letter"
                    .to_string(),
            ));
        }

        if self.password != self.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        Ok(SignupRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: SecretString::from(self.password.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
        }
    }

    fn message(result: Result<SignupRequest, AppError>) -> String {
        match result {
            Err(AppError::Validation(message)) => message,
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected validation failure"),
        }
    }

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("a@b.com"));
        assert!(!valid_email("bad"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a b@c.com"));
    }

    #[test]
    fn password_rule_needs_length_uppercase_and_digit() {
        assert!(!valid_password("abcdefg1"));
        assert!(!valid_password("Abcdefgh"));
        assert!(!valid_password("Abcde1"));
        assert!(valid_password("Abcdefg1"));
    }

    #[test]
    fn password_length_counts_utf16_units() {
        // Each emoji is two UTF-16 units: seven chars, eight units.
        assert!(valid_password("Abcde1\u{1F600}"));
        assert!(!valid_password("Abcd1\u{1F600}"));
        assert!(valid_password("A1\u{1F600}\u{1F600}\u{1F600}"));
    }

    #[test]
    fn login_form_sends_email_as_typed() {
        let form = LoginForm {
            email: " a@b.com ".to_string(),
            password: "Secret123".to_string(),
        };
        let request = form.validate().expect("valid");
        assert_eq!(request.email, " a@b.com ");
    }

    #[test]
    fn login_form_rejects_blank_fields() {
        let form = LoginForm {
            email: "   ".to_string(),
            password: "Secret123".to_string(),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::Validation(message)) if message == "Email and password are required."
        ));
    }

    #[test]
    fn bad_email_is_rejected() {
        assert_eq!(message(form("bad", "Abcdefg1").validate()), "Invalid email format");
    }

    #[test]
    fn weak_password_is_rejected() {
        assert_eq!(
            message(form("a@b.com", "abcdefg1").validate()),
            "Password must be at least 8 characters, include a number and uppercase letter"
        );
    }

    #[test]
    fn strong_password_passes() {
        let request = form("a@b.com", "Abcdefg1").validate().expect("valid");
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.full_name, "Ada Lovelace");
    }

    #[test]
    fn required_fields_are_checked_first() {
        let mut incomplete = form("bad", "weak");
        incomplete.full_name.clear();
        assert_eq!(message(incomplete.validate()), "All fields are required");
    }

    #[test]
    fn mismatched_confirmation_is_rejected_last() {
        let mut mismatched = form("a@b.com", "Abcdefg1");
        mismatched.confirm_password = "Abcdefg2".to_string();
        assert_eq!(message(mismatched.validate()), "Passwords do not match");
    }
}
