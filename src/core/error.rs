use thiserror::Error;

/// Core error types for GlassTube
#[derive(Debug, Error)]
pub enum Error {
    /// Login lookup found no matching email/password pair
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A submission was missing a required field (title, description, body...)
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// Registration attempted with an email already in the directory
    #[error("An account with email {0} already exists")]
    EmailTaken(String),

    /// The action needs an active session
    #[error("Sign in required")]
    SignInRequired,

    /// The active session's role does not allow the action
    #[error("Not permitted for this account")]
    NotPermitted,

    /// Input validation failed
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Text shown to the user in a notification.
    ///
    /// The two expected failure kinds keep the exact wording the login and
    /// upload dialogs use; everything else falls back to the `Display` text.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid email or password".to_string(),
            Self::MissingRequiredField { .. } => "Please fill in all required fields".to_string(),
            Self::SignInRequired => "Sign in to continue".to_string(),
            Self::NotPermitted => "Only admins can upload videos".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            Error::InvalidCredentials.user_message(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_missing_field_message_hides_field_name() {
        let err = Error::MissingRequiredField { field: "title" };
        assert_eq!(err.user_message(), "Please fill in all required fields");
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = Error::InvalidInput {
            field: "email",
            message: "missing @".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid email: missing @");
    }
}
