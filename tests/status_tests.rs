use chrono::{Local, TimeZone};
use rwaterlogger::config::Config;
use rwaterlogger::core::clock::FixedClock;
use rwaterlogger::core::log::LogLogic;
use rwaterlogger::core::status::{EMPTY_STATE, StatusReport};
use rwaterlogger::core::store::DailyRecordStore;
use rwaterlogger::db::log::{AuditOp, load_log, ttlog};
use rwaterlogger::db::pool::DbPool;
use rwaterlogger::models::WeekdayStyle;
use rwaterlogger::storage::MemoryStore;
use rwaterlogger::utils::formatting::strip_ansi;

fn store_on_june_18() -> DailyRecordStore<MemoryStore, FixedClock> {
    let clock = FixedClock::new(Local.with_ymd_and_hms(2025, 6, 18, 8, 0, 0).unwrap());
    DailyRecordStore::open_with_clock(MemoryStore::new(), clock).0
}

#[test]
fn test_empty_status_renders_placeholder() {
    let store = store_on_june_18();
    let report = StatusReport::from_store(&store, WeekdayStyle::Long).unwrap();

    let text = strip_ansi(&report.render(&Config::default()));

    assert!(text.contains("2025-06-18 Wednesday"));
    assert!(text.contains("0 / 8 glasses"));
    assert!(text.contains("Completion: 0% [□□□□□□□□]"));
    assert!(text.contains(EMPTY_STATE));
}

#[test]
fn test_status_lists_newest_first() {
    let mut store = store_on_june_18();
    store.check_in();
    store.clock().advance(chrono::Duration::hours(2));
    store.check_in();

    let report = StatusReport::from_store(&store, WeekdayStyle::Short).unwrap();
    assert_eq!(report.weekday.as_deref(), Some("We"));
    assert_eq!(report.records[0].time, "10:00:00");
    assert_eq!(report.records[1].time, "08:00:00");

    let text = strip_ansi(&report.render(&Config::default()));
    assert!(text.find("10:00:00").unwrap() < text.find("08:00:00").unwrap());
    assert!(text.contains("Completion: 25% [■■□□□□□□]"));
    assert!(!text.contains(EMPTY_STATE));
}

#[test]
fn test_status_json_omits_weekday_when_disabled() {
    let store = store_on_june_18();
    let report = StatusReport::from_store(&store, WeekdayStyle::None).unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert!(json.get("weekday").is_none());
    assert_eq!(json["date"], "2025-06-18");
    assert_eq!(json["completion_rate"], 0);
}

#[test]
fn test_hidden_date_header() {
    let store = store_on_june_18();
    let report = StatusReport::from_store(&store, WeekdayStyle::Long).unwrap();
    let cfg = Config {
        show_date: false,
        ..Config::default()
    };

    assert!(!report.render(&cfg).contains("2025-06-18"));
}

#[test]
fn test_log_render_truncates_long_targets() {
    let pool = DbPool::in_memory().unwrap();
    let target = "x".repeat(80);
    ttlog(&pool.conn, AuditOp::CheckIn, &target, "Glass #1 at 08:00:00").unwrap();

    let entries = load_log(&pool.conn).unwrap();
    let lines = LogLogic::render(&entries);
    let last = strip_ansi(lines.last().unwrap());

    assert!(last.contains("checkin (xxx"));
    assert!(last.contains("... => Glass #1 at 08:00:00"));
    assert!(!last.contains(&target));
}
