pub mod checkin;
pub mod clear;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod status;

use crate::config::Config;
use crate::core::store::{DailyRecordStore, LoadOutcome};
use crate::db::kv::SqliteStore;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and load today's record.
///
/// Rollovers and unreadable payloads are written to the internal log.
pub fn open_today(cfg: &Config) -> AppResult<DailyRecordStore<SqliteStore>> {
    let pool = DbPool::open_ready(&cfg.database)?;
    let (store, outcome) = DailyRecordStore::open(SqliteStore::new(pool));

    let conn = store.storage().conn();
    match &outcome {
        LoadOutcome::Rollover { previous } => ttlog_quiet(
            conn,
            AuditOp::Rollover,
            store.current_date(),
            &format!("Records of {} discarded", previous),
        ),
        LoadOutcome::Unreadable { reason } => {
            ttlog_quiet(conn, AuditOp::LoadError, store.current_date(), reason)
        }
        LoadOutcome::FirstRun | LoadOutcome::Restored { .. } => {}
    }

    Ok(store)
}
