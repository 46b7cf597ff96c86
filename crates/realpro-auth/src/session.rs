//! Session Store — owns the single persisted session slot.

use chrono::{Duration, Utc};
use realpro_core::error::RealProResult;
use realpro_core::models::session::Session;
use realpro_core::models::user::User;
use realpro_core::store::{self, KeyValueStore, keys};
use tracing::warn;

use crate::token;

#[derive(Clone)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Issue a session for `user` and persist it, replacing any prior
    /// session in the slot.
    pub async fn create_session(&self, user: &User, ttl: Duration) -> RealProResult<Session> {
        let now = Utc::now();
        let session = Session {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            token: token::generate_session_token(),
            issued_at: now,
            expires_at: now + ttl,
            role: user.role,
        };

        let doc = store::encode_document(&session)?;
        self.store.set(keys::SESSION, doc).await?;
        Ok(session)
    }

    /// Read the persisted session.
    ///
    /// Fails closed: a corrupt document reads as absent (logged, never
    /// surfaced).
    pub async fn get(&self) -> RealProResult<Option<Session>> {
        let Some(raw) = self.store.get(keys::SESSION).await? else {
            return Ok(None);
        };
        match store::decode_document::<Session>(keys::SESSION, &raw) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                warn!(%error, "unreadable session slot, treating as signed out");
                Ok(None)
            }
        }
    }

    /// Whether a valid session exists right now: present, non-empty
    /// token, and expiry strictly in the future.
    ///
    /// Side-effect-free — an expired record stays in storage until a
    /// new login overwrites it or [`clear`](Self::clear) removes it.
    pub async fn is_authenticated(&self) -> RealProResult<bool> {
        let now = Utc::now();
        Ok(self.get().await?.is_some_and(|s| s.is_valid_at(now)))
    }

    /// Remove the session slot (logout).
    pub async fn clear(&self) -> RealProResult<()> {
        self.store.remove(keys::SESSION).await
    }
}
