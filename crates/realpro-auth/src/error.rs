//! Authentication error types.

use realpro_core::error::RealProError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email not found. Please sign up first.")]
    AccountNotFound { email: String },

    #[error("Invalid password")]
    InvalidPassword,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl AuthError {
    /// The form field this error is surfaced on.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AuthError::AccountNotFound { .. } => Some("email"),
            AuthError::InvalidPassword => Some("password"),
            AuthError::Crypto(_) => None,
        }
    }
}

impl From<AuthError> for RealProError {
    fn from(err: AuthError) -> Self {
        let reason = err.to_string();
        match err {
            AuthError::AccountNotFound { email } => RealProError::NotFound {
                entity: "account".into(),
                id: email,
            },
            AuthError::InvalidPassword => RealProError::AuthenticationFailed { reason },
            AuthError::Crypto(msg) => RealProError::Crypto(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_misses_land_on_their_form_fields() {
        let not_found = AuthError::AccountNotFound {
            email: "a@x.com".into(),
        };
        assert_eq!(not_found.field(), Some("email"));
        assert_eq!(not_found.to_string(), "Email not found. Please sign up first.");

        assert_eq!(AuthError::InvalidPassword.field(), Some("password"));
        assert_eq!(AuthError::InvalidPassword.to_string(), "Invalid password");
    }

    #[test]
    fn account_miss_converts_to_not_found() {
        let err: RealProError = AuthError::AccountNotFound {
            email: "a@x.com".into(),
        }
        .into();
        assert!(matches!(err, RealProError::NotFound { .. }));
    }
}
