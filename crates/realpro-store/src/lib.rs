//! RealPro Store — key-value store backends implementing the
//! `realpro-core` capability.
//!
//! This crate provides:
//! - [`MemoryStore`] — a shared in-process map
//! - [`JsonFileStore`] — a single JSON document on disk
//! - [`StoreError`] — the backend error type
//!
//! Both backends broadcast a change notification on every mutation;
//! cloning a store yields another handle onto the same underlying
//! storage.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
