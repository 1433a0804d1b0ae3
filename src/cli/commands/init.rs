use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rWaterlogger…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open_ready(&db_path)?;
    success(format!("Database initialized at {}", &db_path));

    ttlog_quiet(
        &pool.conn,
        AuditOp::Init,
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rWaterlogger initialization completed!");
    Ok(())
}
