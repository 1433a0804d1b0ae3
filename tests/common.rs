#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a throw-away directory so the
/// user's real configuration is never read or written.
pub fn rwl(home: &std::path::Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rwaterlogger");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rwaterlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a raw payload into the storage slot of the database at `db_path`.
pub fn seed_slot(db_path: &str, payload: &str) {
    use rwaterlogger::core::store::STORAGE_KEY;
    use rwaterlogger::db::kv::SqliteStore;
    use rwaterlogger::db::pool::DbPool;
    use rwaterlogger::storage::KeyValueStore;

    let pool = DbPool::open_ready(db_path).expect("open db");
    let mut store = SqliteStore::new(pool);
    store.set(STORAGE_KEY, payload).expect("seed slot");
}

/// Read the raw payload of the storage slot.
pub fn read_slot(db_path: &str) -> Option<String> {
    use rwaterlogger::core::store::STORAGE_KEY;
    use rwaterlogger::db::kv::SqliteStore;
    use rwaterlogger::db::pool::DbPool;
    use rwaterlogger::storage::KeyValueStore;

    let pool = DbPool::open_ready(db_path).expect("open db");
    SqliteStore::new(pool).get(STORAGE_KEY).expect("read slot")
}

pub fn today_key() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
