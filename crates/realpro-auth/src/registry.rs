//! User Registry — the persisted account sequence.

use std::sync::LazyLock;

use chrono::Utc;
use realpro_core::error::{RealProError, RealProResult};
use realpro_core::models::user::{CreateUser, User, UserRole, UserStatus};
use realpro_core::store::{self, KeyValueStore, keys};
use regex::Regex;
use tracing::warn;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::password;

/// Same shape the signup form enforces: something@something.tld.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("static email pattern"));

pub(crate) fn email_shape_ok(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[derive(Clone)]
pub struct UserRegistry<S: KeyValueStore> {
    store: S,
    min_password_length: usize,
    /// Optional server-side pepper for password hashing.
    pepper: Option<String>,
}

impl<S: KeyValueStore> UserRegistry<S> {
    pub fn new(store: S, config: &AuthConfig) -> Self {
        Self {
            store,
            min_password_length: config.min_password_length,
            pepper: config.pepper.clone(),
        }
    }

    /// Load the full account sequence.
    ///
    /// Fails open: an absent or corrupt slot reads as empty (logged,
    /// never surfaced).
    pub async fn all(&self) -> RealProResult<Vec<User>> {
        let Some(raw) = self.store.get(keys::USERS).await? else {
            return Ok(Vec::new());
        };
        match store::decode_document(keys::USERS, &raw) {
            Ok(users) => Ok(users),
            Err(error) => {
                warn!(%error, "unreadable user registry, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Linear-scan existence check, used at signup to reject duplicates
    /// and at login to tell "no such account" from "wrong password".
    pub async fn email_exists(&self, email: &str) -> RealProResult<bool> {
        Ok(self.all().await?.iter().any(|u| u.email == email))
    }

    /// Validate and append a new account.
    ///
    /// The stored record carries the Argon2id hash of the password,
    /// never the plaintext.
    pub async fn register(&self, input: CreateUser) -> RealProResult<User> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RealProError::validation("name", "Name is required"));
        }
        if input.email.is_empty() {
            return Err(RealProError::validation("email", "Email is required"));
        }
        if !email_shape_ok(&input.email) {
            return Err(RealProError::validation("email", "Email is invalid"));
        }
        if input.password.is_empty() {
            return Err(RealProError::validation("password", "Password is required"));
        }
        if input.password.len() < self.min_password_length {
            return Err(RealProError::validation(
                "password",
                format!(
                    "Password must be at least {} characters",
                    self.min_password_length
                ),
            ));
        }

        let mut users = self.all().await?;
        if users.iter().any(|u| u.email == input.email) {
            return Err(RealProError::validation("email", "Email already exists"));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: input.email,
            password_hash: password::hash_password(&input.password, self.pepper.as_deref())?,
            role: UserRole::default(),
            status: UserStatus::Active,
            created_at: Utc::now(),
        };

        users.push(user.clone());
        let doc = store::encode_document(&users)?;
        self.store.set(keys::USERS, doc).await?;
        Ok(user)
    }

    /// Linear scan for an active account whose email matches exactly
    /// and whose password hash verifies.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> RealProResult<Option<User>> {
        for user in self.all().await? {
            if user.email == email
                && user.is_active()
                && password::verify_password(password, &user.password_hash, self.pepper.as_deref())?
            {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }
}
