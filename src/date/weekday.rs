use chrono::{Datelike, NaiveDate};

const KOREAN_WEEKDAYS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Monday = 0 .. Sunday = 6
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    weekday_index(date) >= 5
}

pub fn korean_weekday_name(date: NaiveDate) -> &'static str {
    KOREAN_WEEKDAYS[weekday_index(date) as usize]
}
