//! Authentication service — signup, login, and logout orchestration.

use realpro_core::error::{RealProError, RealProResult};
use realpro_core::models::session::Session;
use realpro_core::models::user::CreateUser;
use realpro_core::store::KeyValueStore;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::registry::{UserRegistry, email_shape_ok};
use crate::session::SessionStore;

/// Input for the signup flow.
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Input for the login flow.
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Authentication service.
///
/// Generic over the store capability so the auth layer has no
/// dependency on a concrete backend.
#[derive(Clone)]
pub struct AuthService<S: KeyValueStore> {
    registry: UserRegistry<S>,
    sessions: SessionStore<S>,
    config: AuthConfig,
}

impl<S: KeyValueStore> AuthService<S> {
    pub fn new(store: S, config: AuthConfig) -> Self {
        Self {
            registry: UserRegistry::new(store.clone(), &config),
            sessions: SessionStore::new(store),
            config,
        }
    }

    pub fn registry(&self) -> &UserRegistry<S> {
        &self.registry
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// Create an account and sign it in immediately.
    pub async fn signup(&self, input: SignupInput) -> RealProResult<Session> {
        // 1. Confirmation must match before anything is persisted.
        if input.confirm_password.is_empty() {
            return Err(RealProError::validation(
                "confirm_password",
                "Please confirm your password",
            ));
        }
        if input.password != input.confirm_password {
            return Err(RealProError::validation(
                "confirm_password",
                "Passwords do not match",
            ));
        }

        // 2. Field validation, uniqueness, and hashing happen in the
        //    registry.
        let user = self
            .registry
            .register(CreateUser {
                name: input.name,
                email: input.email,
                password: input.password,
            })
            .await?;

        // 3. Auto-login: issue the session right away.
        self.sessions
            .create_session(&user, self.config.session_ttl())
            .await
    }

    /// Authenticate with email + password and issue a session,
    /// replacing any prior one.
    pub async fn login(&self, input: LoginInput) -> RealProResult<Session> {
        // 1. Form-level checks, surfaced on their fields.
        if input.email.is_empty() {
            return Err(RealProError::validation("email", "Email is required"));
        }
        if !email_shape_ok(&input.email) {
            return Err(RealProError::validation("email", "Email is invalid"));
        }
        if input.password.is_empty() {
            return Err(RealProError::validation("password", "Password is required"));
        }

        // 2. Credential scan.
        if let Some(user) = self
            .registry
            .find_by_credentials(&input.email, &input.password)
            .await?
        {
            return self
                .sessions
                .create_session(&user, self.config.session_ttl())
                .await;
        }

        // 3. Distinguish a wrong password from an unknown account for
        //    the form's error placement. Deliberate disclosure, kept
        //    as the product designed it.
        if self.registry.email_exists(&input.email).await? {
            Err(AuthError::InvalidPassword.into())
        } else {
            Err(AuthError::AccountNotFound { email: input.email }.into())
        }
    }

    /// Drop the persisted session.
    pub async fn logout(&self) -> RealProResult<()> {
        self.sessions.clear().await
    }

    /// Whether a valid session exists right now.
    pub async fn is_authenticated(&self) -> RealProResult<bool> {
        self.sessions.is_authenticated().await
    }
}
