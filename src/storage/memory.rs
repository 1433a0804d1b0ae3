use std::collections::HashMap;

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};

/// In-memory slot store. Counts writes and can be switched into a failing
/// mode to simulate a broken backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value (not counted as a write).
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads {
            return Err(AppError::StorageRead(format!("read of '{}' refused", key)));
        }
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::StorageWrite(format!("quota exceeded for '{}'", key)));
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
