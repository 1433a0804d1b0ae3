use crate::cli::commands::open_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusReport;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Record a glass of water and show the updated status.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { json } = cmd {
        let mut store = open_today(cfg)?;
        let entry = store.check_in();

        ttlog_quiet(
            store.storage().conn(),
            AuditOp::CheckIn,
            store.current_date(),
            &format!("Glass #{} at {}", store.records().len(), entry.time),
        );

        let report = StatusReport::from_store(&store, cfg.weekday_style())?;
        if *json {
            println!("{}", report.to_json()?);
        } else {
            success(format!("Checked in at {}", entry.time));
            println!("{}", report.render(cfg));
        }
    }

    Ok(())
}
