//! File-backed store: every slot lives in one JSON document on disk.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use realpro_core::error::RealProResult;
use realpro_core::store::{KeyValueStore, StoreChange};
use tokio::sync::broadcast;
use tracing::warn;

use crate::error::StoreError;
use crate::memory::CHANGE_CHANNEL_CAPACITY;

/// A persistent `KeyValueStore` that mirrors its slots in memory and
/// rewrites the whole document on every mutation.
///
/// Handles cloned from one `open` share the in-memory view and the
/// change channel; the file provides durability across runs. The
/// document is replaced wholesale, so concurrent writers follow the
/// same last-writer-wins rule as the rest of the system.
#[derive(Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
    slots: Arc<RwLock<HashMap<String, String>>>,
    changes: broadcast::Sender<StoreChange>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing document.
    ///
    /// A missing file starts empty. An unreadable document is treated
    /// as empty and logged — corruption is recovered locally, never
    /// surfaced.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let slots = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(error) => {
                    warn!(path = %path.display(), %error, "corrupt store document, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Self {
            path: Arc::new(path),
            slots: Arc::new(RwLock::new(slots)),
            changes,
        })
    }

    /// Serialize the current slot map and replace the file.
    async fn persist(&self) -> Result<(), StoreError> {
        let raw = {
            let slots = self.slots.read().map_err(|_| StoreError::Poisoned)?;
            serde_json::to_string_pretty(&*slots)?
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&*self.path, raw).await?;
        Ok(())
    }

    fn notify(&self, key: &str) {
        let _ = self.changes.send(StoreChange {
            key: key.to_string(),
        });
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> RealProResult<Option<String>> {
        let slots = self.slots.read().map_err(|_| StoreError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> RealProResult<()> {
        {
            let mut slots = self.slots.write().map_err(|_| StoreError::Poisoned)?;
            slots.insert(key.to_string(), value);
        }
        self.persist().await?;
        self.notify(key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> RealProResult<()> {
        {
            let mut slots = self.slots.write().map_err(|_| StoreError::Poisoned)?;
            slots.remove(key);
        }
        self.persist().await?;
        self.notify(key);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.changes.subscribe()
    }
}
