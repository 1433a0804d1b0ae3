//! The "today" view: date header, counters and the newest-first list.

use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::stats::DAILY_GOAL;
use crate::core::store::DailyRecordStore;
use crate::errors::AppResult;
use crate::models::{CheckIn, WeekdayStyle};
use crate::storage::KeyValueStore;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::progress_bar;
use serde::Serialize;

pub const EMPTY_STATE: &str = "No records yet, start drinking water!";

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    pub count: usize,
    pub goal: usize,
    pub completion_rate: u32,
    /// Newest first.
    pub records: Vec<CheckIn>,
}

impl StatusReport {
    pub fn from_store<S, C>(store: &DailyRecordStore<S, C>, style: WeekdayStyle) -> AppResult<Self>
    where
        S: KeyValueStore,
        C: Clock,
    {
        let day = date::parse_day_key(store.current_date())?;
        let stats = store.stats();

        Ok(Self {
            date: store.current_date().to_string(),
            weekday: date::weekday_label(&day, style),
            count: stats.count,
            goal: DAILY_GOAL,
            completion_rate: stats.completion_rate,
            records: store.records_descending(),
        })
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, cfg: &Config) -> String {
        let mut out = Vec::new();

        if cfg.show_date {
            let title = match &self.weekday {
                Some(wd) => format!("💧 {} {}", self.date, wd),
                None => format!("💧 {}", self.date),
            };
            out.push(header(title, &cfg.separator_char));
        }

        out.push(format!("Today:      {} / {} glasses", self.count, self.goal));
        out.push(format!(
            "Completion: {}% {}",
            self.completion_rate,
            progress_bar(self.count, self.goal)
        ));
        out.push(String::new());

        if self.records.is_empty() {
            out.push(EMPTY_STATE.to_string());
        } else {
            for r in &self.records {
                out.push(format!("  {}  💧", r.time));
            }
        }

        out.join("\n")
    }
}
