use crate::db::log::AuditOp;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// A schema step, applied once and remembered in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251019_0001_create_kv",
        description: "created kv table",
        apply: create_kv_table,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the single-slot key/value table.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = ?1 AND target = ?2 LIMIT 1",
    )?;
    let found = chk
        .query_row(params![AuditOp::MigrationApplied.as_str(), version], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

fn mark_applied(conn: &Connection, m: &Migration) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
        params![
            Local::now().to_rfc3339(),
            AuditOp::MigrationApplied.as_str(),
            m.version,
            format!("Migration applied: {}", m.description)
        ],
    )?;
    Ok(())
}

/// Versions not yet recorded as applied.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, each inside its own
/// transaction together with its `migration_applied` marker.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;
        let step = (m.apply)(conn).and_then(|_| mark_applied(conn, m));
        match step {
            Ok(()) => conn.execute_batch("COMMIT;")?,
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                return Err(e);
            }
        }

        tracing::debug!(version = m.version, "Migration applied");
    }

    Ok(())
}
