use chrono::{Duration, NaiveDate};

use super::weekday_index;

fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(weekday_index(date)))
}

/// Number of whole weeks between the week containing `today` and the week
/// containing `target`. This is the `week` query parameter the menu page
/// expects.
///
/// Both anchors are Mondays, so the day difference is always a multiple of 7
/// and truncating division is exact for negative offsets too.
pub fn resolve_week_offset(target: NaiveDate, today: NaiveDate) -> i64 {
    let delta_days = monday_of(target)
        .signed_duration_since(monday_of(today))
        .num_days();
    delta_days / 7
}
