use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::{init_db, integrity_check};
use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { migrate, check } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            let pending = pending_migrations(&pool.conn)?;
            if pending.is_empty() {
                info("Database schema is up to date.");
            } else {
                info(format!("Running {} migration(s)…", pending.len()));
                init_db(&pool.conn)?;
                for v in pending {
                    success(format!("Migration applied: {}", v));
                }
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            info("Running integrity check…");
            let report = integrity_check(&pool.conn)?;

            if report.len() == 1 && report[0] == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", report.join("; ")));
            }
        }
    }

    Ok(())
}
