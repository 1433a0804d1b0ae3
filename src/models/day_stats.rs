use serde::Serialize;

/// Derived counters shown next to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub count: usize,
    /// Integer percentage of the daily goal, capped at 100.
    pub completion_rate: u32,
}
