//! Durable key-value slot used by the daily record store.
//!
//! Two backends exist: the SQLite table in [`crate::db::kv`] and the
//! in-memory [`MemoryStore`].

pub mod memory;

pub use memory::MemoryStore;

use crate::errors::AppResult;

/// A persistence layer mapping string keys to string values.
///
/// `get` returns `Ok(None)` when the key has never been written.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}
