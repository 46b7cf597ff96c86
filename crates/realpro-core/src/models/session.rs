//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRole;

/// The single persisted session record.
///
/// Exactly one session slot exists at a time; a new login overwrites it.
/// Timestamps serialize as epoch milliseconds in the slot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Id of the user the session was issued for.
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// 64-character hex token (32 random bytes).
    pub token: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub issued_at: DateTime<Utc>,
    #[serde(rename = "expires", with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub role: UserRole,
}

impl Session {
    /// Valid iff the token is non-empty and the expiry lies strictly in
    /// the future. Checking never mutates storage; expired records stay
    /// in place until overwritten or cleared.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.token.is_empty() && self.expires_at > now
    }
}
