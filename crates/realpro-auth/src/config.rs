//! Authentication configuration.

use chrono::Duration;

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session lifetime in seconds (default: 86_400 = 24 hours).
    pub session_ttl_secs: u64,
    /// Minimum password length accepted at signup (default: 6).
    pub min_password_length: usize,
    /// Optional pepper prepended to passwords before Argon2id hashing.
    pub pepper: Option<String>,
}

impl AuthConfig {
    /// Session lifetime as a duration.
    pub fn session_ttl(&self) -> Duration {
        Duration::seconds(self.session_ttl_secs as i64)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: 86_400,
            min_password_length: 6,
            pepper: None,
        }
    }
}
