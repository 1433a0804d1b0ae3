use crate::cli::commands::open_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::ClearOutcome;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = open_today(cfg)?;

        let outcome = store.clear(|| {
            *yes || ask_confirmation("Clear all of today's records? This action is irreversible.")
        });

        match outcome {
            ClearOutcome::Empty => info("Nothing to clear."),
            ClearOutcome::Cancelled => info("Operation cancelled."),
            ClearOutcome::Cleared { removed } => {
                ttlog_quiet(
                    store.storage().conn(),
                    AuditOp::Clear,
                    store.current_date(),
                    &format!("Removed {} record(s)", removed),
                );
                success(format!("Cleared {} record(s) for {}.", removed, store.current_date()));
            }
        }
    }

    Ok(())
}
