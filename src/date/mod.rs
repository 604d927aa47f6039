mod error;
mod parse_date;
mod week;
mod weekday;

pub use error::Error;
pub use parse_date::parse;
pub use week::resolve_week_offset;
pub use weekday::{is_weekend, korean_weekday_name, weekday_index};
