use crate::cli::commands::open_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusReport;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let store = open_today(cfg)?;
        let report = StatusReport::from_store(&store, cfg.weekday_style())?;

        if *json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report.render(cfg));
        }
    }

    Ok(())
}
