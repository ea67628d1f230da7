use thiserror::Error;

/// Errors surfaced by API helpers, storage and local form validation.
///
/// Screens never show these verbatim; they call [`AppError::user_message`] with
/// their own fallback so only backend `detail` text or local validation text
/// reaches the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http {
        status: u16,
        message: String,
        detail: Option<String>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("No token returned from backend")]
    MissingToken,
}

impl AppError {
    /// Picks the text a screen should render: local validation messages and
    /// backend `detail` win, anything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            AppError::MissingToken => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_message_prefers_backend_detail() {
        let err = AppError::Http {
            status: 400,
            message: "{\"detail\":\"Email already registered\"}".to_string(),
            detail: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message("Signup failed"), "Email already registered");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let err = AppError::Http {
            status: 502,
            message: "Bad gateway".to_string(),
            detail: None,
        };
        assert_eq!(err.user_message("Invalid credentials"), "Invalid credentials");
        assert_eq!(
            AppError::Network("offline".to_string()).user_message("Update failed"),
            "Update failed"
        );
    }

    #[test]
    fn missing_token_is_distinct_from_invalid_credentials() {
        let message = AppError::MissingToken.user_message("Invalid credentials");
        assert_eq!(message, "No token returned from backend");
    }

    #[test]
    fn unauthorized_only_matches_401() {
        let unauthorized = AppError::Http {
            status: 401,
            message: "Request failed.".to_string(),
            detail: None,
        };
        let forbidden = AppError::Http {
            status: 403,
            message: "Request failed.".to_string(),
            detail: None,
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
    }
}
