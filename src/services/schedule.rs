//! Turns a stay into the list of cleanings it needs.
//!
//! One periodic cleaning at 13:00 on every day from the check-in day up to,
//! but not including, the day before check-out; then one general cleaning an
//! hour after check-out. Days are UTC calendar days.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::models::CleaningKind;

const PERIODIC_HOUR: i64 = 13;
const TURNOVER_DELAY_HOURS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub at: DateTime<Utc>,
    pub kind: CleaningKind,
}

fn midnight(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Cleanings for a stay from `check_in` to `check_out` (exclusive), in
/// chronological order. Pure and deterministic.
pub fn generate(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Vec<ScheduledTask> {
    let first_day = midnight(check_in);
    let last_day = midnight(check_out) - Duration::days(1);

    let mut tasks = Vec::new();
    let mut day = first_day;
    while day < last_day {
        tasks.push(ScheduledTask {
            at: day + Duration::hours(PERIODIC_HOUR),
            kind: CleaningKind::Periodic,
        });
        day += Duration::days(1);
    }

    tasks.push(ScheduledTask {
        at: check_out + Duration::hours(TURNOVER_DELAY_HOURS),
        kind: CleaningKind::General,
    });
    tasks
}
