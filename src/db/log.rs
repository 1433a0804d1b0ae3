//! Internal audit log, stored in the `log` table.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Operations recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOp {
    Init,
    CheckIn,
    Clear,
    Rollover,
    MigrationApplied,
    LoadError,
    SaveError,
}

impl AuditOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditOp::Init => "init",
            AuditOp::CheckIn => "checkin",
            AuditOp::Clear => "clear",
            AuditOp::Rollover => "rollover",
            AuditOp::MigrationApplied => "migration_applied",
            AuditOp::LoadError => "load_error",
            AuditOp::SaveError => "save_error",
        }
    }
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, op: AuditOp, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, op.as_str(), target, message])?;

    Ok(())
}

/// Like [`ttlog`], but a failure only produces a diagnostic.
pub fn ttlog_quiet(conn: &Connection, op: AuditOp, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, op, target, message) {
        tracing::warn!(operation = op.as_str(), error = %e, "Failed to write internal log");
    }
}

/// One row of the `log` table.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
