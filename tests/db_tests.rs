use rusqlite::Connection;
use rwaterlogger::cli::commands::open_today;
use rwaterlogger::config::Config;
use rwaterlogger::core::store::STORAGE_KEY;
use rwaterlogger::db::kv::SqliteStore;
use rwaterlogger::db::log::load_log;
use rwaterlogger::db::migrate::{pending_migrations, run_pending_migrations};
use rwaterlogger::db::pool::DbPool;
use rwaterlogger::storage::KeyValueStore;

mod common;
use common::setup_test_db;

#[test]
fn test_fresh_database_has_only_kv_migration() {
    let conn = Connection::open_in_memory().unwrap();

    assert_eq!(
        pending_migrations(&conn).unwrap(),
        vec!["20251019_0001_create_kv"]
    );

    run_pending_migrations(&conn).unwrap();
    run_pending_migrations(&conn).unwrap();

    assert!(pending_migrations(&conn).unwrap().is_empty());
    let applied = load_log(&conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied, 1);

    let extra_indexes: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'index' AND tbl_name = 'kv' AND name NOT LIKE 'sqlite_autoindex%'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(extra_indexes, 0);
}

#[test]
fn test_slot_is_overwritten_in_place() {
    let mut store = SqliteStore::new(DbPool::in_memory().unwrap());

    assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    store.set(STORAGE_KEY, "first").unwrap();
    store.set(STORAGE_KEY, "second").unwrap();

    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("second"));
    let rows: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_read_failure_is_logged_once() {
    let db_path = setup_test_db("read_failure_logged_once");
    {
        let pool = DbPool::open_ready(&db_path).unwrap();
        pool.conn.execute_batch("DROP TABLE kv;").unwrap();
    }

    let cfg = Config {
        database: db_path.clone(),
        ..Config::default()
    };
    let store = open_today(&cfg).unwrap();
    assert!(store.records().is_empty());

    let load_errors = load_log(store.storage().conn())
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "load_error")
        .count();
    assert_eq!(load_errors, 1);
}
