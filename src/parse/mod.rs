mod fragment_id;
mod fragment_text;
mod menu_table;
mod remove_excess_whitespace;
pub(crate) mod static_selector;

pub use menu_table::{extract_menus, ExtractedMeal};
pub use remove_excess_whitespace::remove_excess_whitespace;
