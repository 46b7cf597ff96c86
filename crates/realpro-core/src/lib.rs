//! RealPro Core — domain models, error taxonomy, and the shared
//! key-value store capability.

pub mod error;
pub mod models;
pub mod store;

pub use error::{RealProError, RealProResult};
pub use store::{KeyValueStore, StoreChange};
