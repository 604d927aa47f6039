use std::fmt::Display;

use chrono::NaiveDate;

use crate::date::weekday_index;
use crate::menu::MealSlot;

/// The `id` the menu page gives the table cell holding one meal slot on one
/// weekday: `table-{restaurant code}-{time range}-{weekday}`.
///
/// The weekday runs Monday = 0 .. Sunday = 6. The page only has cells for
/// 0..=4, so weekend ids are well formed but never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentId {
    slot: MealSlot,
    weekday: u32,
}

impl FragmentId {
    pub fn new(slot: MealSlot, date: NaiveDate) -> Self {
        Self {
            slot,
            weekday: weekday_index(date),
        }
    }
}

impl Display for FragmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "table-{}-{}-{}",
            self.slot.restaurant.code(),
            self.slot.time_range,
            self.weekday
        )
    }
}
