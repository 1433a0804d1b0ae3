//! SQLite backend for the durable key-value slot.

use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::storage::KeyValueStore;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional();

        // Read failures are audited by the caller, once per load.
        value.map_err(|e| AppError::StorageRead(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        let written = self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        );

        match written {
            Ok(_) => Ok(()),
            Err(e) => {
                ttlog_quiet(&self.pool.conn, AuditOp::SaveError, key, &e.to_string());
                Err(AppError::StorageWrite(e.to_string()))
            }
        }
    }
}
