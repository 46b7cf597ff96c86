//! The shared key-value store capability.
//!
//! Every component depends on this trait rather than on a concrete
//! global, so implementations may back it with any key-value
//! persistence. Values are whole text documents replaced atomically per
//! slot; there is no partial write, no locking, and no protection
//! against two handles racing a read-modify-write — the last writer
//! wins.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use crate::error::{RealProError, RealProResult};

/// Fixed slot keys of the persisted state layout.
pub mod keys {
    /// Single session object, or absent.
    pub const SESSION: &str = "userSession";
    /// Ordered sequence of user records.
    pub const USERS: &str = "realpro_users";
    /// Ordered sequence of tickets, newest first.
    pub const TICKETS: &str = "tickets";
    /// Literal `"dark"` or `"light"`, consumed by the rendering layer only.
    pub const THEME: &str = "theme";
}

/// Change notification emitted after any mutation, delivered to every
/// subscriber on every handle sharing the same underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    /// Slot key that was written or removed.
    pub key: String,
}

/// The injected store interface: named string slots with
/// whole-value-replace semantics plus subscribe-to-change.
///
/// Implementations are cheap handles; cloning one yields another view
/// of the same underlying storage, which is how independent execution
/// contexts share state.
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    /// Read the raw value of a slot, `None` if absent.
    fn get(&self, key: &str) -> impl Future<Output = RealProResult<Option<String>>> + Send;

    /// Replace the whole value of a slot.
    fn set(&self, key: &str, value: String) -> impl Future<Output = RealProResult<()>> + Send;

    /// Remove a slot entirely.
    fn remove(&self, key: &str) -> impl Future<Output = RealProResult<()>> + Send;

    /// Subscribe to change notifications for every mutation of this
    /// storage, across all handles sharing it.
    fn subscribe(&self) -> broadcast::Receiver<StoreChange>;
}

/// A malformed persisted document.
///
/// Corruption is always recovered close to the read site — the session
/// slot fails closed to `None`, sequence slots fail open to empty — and
/// never surfaces to callers of the domain stores.
#[derive(Debug, thiserror::Error)]
#[error("corrupt document in slot {key}: {source}")]
pub struct CorruptDocument {
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}

/// Decode a slot's JSON document.
pub fn decode_document<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, CorruptDocument> {
    serde_json::from_str(raw).map_err(|source| CorruptDocument {
        key: key.to_string(),
        source,
    })
}

/// Encode a value as a slot JSON document.
pub fn encode_document<T: Serialize>(value: &T) -> RealProResult<String> {
    serde_json::to_string(value).map_err(|e| RealProError::Internal(format!("encode: {e}")))
}
