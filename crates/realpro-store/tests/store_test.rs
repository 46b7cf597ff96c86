//! Integration tests for the store backends.

use realpro_core::store::{KeyValueStore, keys};
use realpro_store::{JsonFileStore, MemoryStore};

#[tokio::test]
async fn memory_roundtrip() {
    let store = MemoryStore::new();

    assert_eq!(store.get(keys::THEME).await.unwrap(), None);

    store.set(keys::THEME, "dark".into()).await.unwrap();
    assert_eq!(
        store.get(keys::THEME).await.unwrap(),
        Some("dark".to_string())
    );

    store.remove(keys::THEME).await.unwrap();
    assert_eq!(store.get(keys::THEME).await.unwrap(), None);
}

#[tokio::test]
async fn memory_set_replaces_whole_value() {
    let store = MemoryStore::new();
    store.set("slot", "first".into()).await.unwrap();
    store.set("slot", "second".into()).await.unwrap();
    assert_eq!(store.get("slot").await.unwrap(), Some("second".to_string()));
}

#[tokio::test]
async fn cloned_handle_sees_writes() {
    let store = MemoryStore::new();
    let other_context = store.clone();

    store.set(keys::TICKETS, "[]".into()).await.unwrap();
    assert_eq!(
        other_context.get(keys::TICKETS).await.unwrap(),
        Some("[]".to_string())
    );
}

#[tokio::test]
async fn subscriber_is_notified_of_mutations() {
    let store = MemoryStore::new();
    let other_context = store.clone();
    let mut changes = other_context.subscribe();

    store.set(keys::TICKETS, "[]".into()).await.unwrap();
    let change = changes.recv().await.unwrap();
    assert_eq!(change.key, keys::TICKETS);

    store.remove(keys::TICKETS).await.unwrap();
    let change = changes.recv().await.unwrap();
    assert_eq!(change.key, keys::TICKETS);
}

#[tokio::test]
async fn removing_absent_key_still_notifies() {
    let store = MemoryStore::new();
    let mut changes = store.subscribe();

    store.remove("never-set").await.unwrap();
    assert_eq!(changes.recv().await.unwrap().key, "never-set");
}

#[tokio::test]
async fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("realpro.json");

    {
        let store = JsonFileStore::open(&path).await.unwrap();
        store.set(keys::USERS, "[]".into()).await.unwrap();
        store.set(keys::THEME, "dark".into()).await.unwrap();
    }

    let reopened = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(
        reopened.get(keys::USERS).await.unwrap(),
        Some("[]".to_string())
    );
    assert_eq!(
        reopened.get(keys::THEME).await.unwrap(),
        Some("dark".to_string())
    );
}

#[tokio::test]
async fn file_store_remove_is_durable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("realpro.json");

    {
        let store = JsonFileStore::open(&path).await.unwrap();
        store.set(keys::SESSION, "{}".into()).await.unwrap();
        store.remove(keys::SESSION).await.unwrap();
    }

    let reopened = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(reopened.get(keys::SESSION).await.unwrap(), None);
}

#[tokio::test]
async fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("realpro.json");
    tokio::fs::write(&path, "{ this is not json").await.unwrap();

    let store = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(store.get(keys::USERS).await.unwrap(), None);

    // The store stays usable after recovery.
    store.set(keys::USERS, "[]".into()).await.unwrap();
    assert_eq!(
        store.get(keys::USERS).await.unwrap(),
        Some("[]".to_string())
    );
}

#[tokio::test]
async fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("absent.json"))
        .await
        .unwrap();
    assert_eq!(store.get(keys::SESSION).await.unwrap(), None);
}
