pub mod check_in;
pub mod day_record;
pub mod day_stats;
pub mod weekday_style;

pub use check_in::CheckIn;
pub use day_record::DayRecord;
pub use day_stats::DayStats;
pub use weekday_style::WeekdayStyle;
