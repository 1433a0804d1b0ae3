//! Goal and completion arithmetic.

use crate::models::DayStats;

/// Glasses per day. Advisory only: check-ins past the goal are accepted.
pub const DAILY_GOAL: usize = 8;

/// Percentage of `goal` reached by `count`, rounded to the nearest integer
/// with halves rounded up (1 of 8 → 13, 3 of 8 → 38), capped at 100.
pub fn completion_rate(count: usize, goal: usize) -> u32 {
    if goal == 0 {
        return 100;
    }
    let rate = (count * 200 + goal) / (goal * 2);
    rate.min(100) as u32
}

pub fn day_stats(count: usize) -> DayStats {
    DayStats {
        count,
        completion_rate: completion_rate(count, DAILY_GOAL),
    }
}
