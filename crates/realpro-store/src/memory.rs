//! In-memory store backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use realpro_core::error::RealProResult;
use realpro_core::store::{KeyValueStore, StoreChange};
use tokio::sync::broadcast;

use crate::error::StoreError;

/// Capacity of the change-notification channel. A subscriber that lags
/// further behind than this misses events and re-reads on the next one.
pub(crate) const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Shared in-process map with whole-value-replace semantics.
///
/// Cloning the handle yields another view of the same storage — the
/// stand-in for a second open context. Writes are last-writer-wins;
/// nothing protects two handles racing a read-modify-write.
#[derive(Clone)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
    changes: broadcast::Sender<StoreChange>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
            changes,
        }
    }

    fn notify(&self, key: &str) {
        // Send fails only when there are no subscribers.
        let _ = self.changes.send(StoreChange {
            key: key.to_string(),
        });
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> RealProResult<Option<String>> {
        let slots = self.slots.read().map_err(|_| StoreError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> RealProResult<()> {
        {
            let mut slots = self.slots.write().map_err(|_| StoreError::Poisoned)?;
            slots.insert(key.to_string(), value);
        }
        self.notify(key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> RealProResult<()> {
        {
            let mut slots = self.slots.write().map_err(|_| StoreError::Poisoned)?;
            slots.remove(key);
        }
        self.notify(key);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.changes.subscribe()
    }
}
