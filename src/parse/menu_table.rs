use std::collections::HashMap;

use chrono::NaiveDate;
use scraper::{ElementRef, Html};

use super::fragment_id::FragmentId;
use super::fragment_text::fragment_components;
use crate::menu::{MealSlot, MEAL_SLOTS};
use crate::static_selector;

/// Cleaned components of one meal slot found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMeal {
    pub slot: MealSlot,
    pub components: Vec<String>,
}

/// Pulls the menu of every meal slot for `target` out of a rendered weekly
/// menu page, in slot table order.
///
/// A slot without a cell on the page, or whose cell is empty, is left out.
/// This is the normal outcome for weekends and weeks without a published menu.
pub fn extract_menus(page: &Html, target: NaiveDate) -> Vec<ExtractedMeal> {
    let cells = cells_by_id(page);
    MEAL_SLOTS
        .iter()
        .filter_map(|&slot| {
            let id = FragmentId::new(slot, target).to_string();
            let Some(cell) = cells.get(id.as_str()) else {
                log::debug!("no menu cell {id} ({})", slot.restaurant.name());
                return None;
            };
            let components = fragment_components(*cell);
            if components.is_empty() {
                log::debug!("menu cell {id} is empty");
                return None;
            }
            Some(ExtractedMeal { slot, components })
        })
        .collect()
}

/// Elements with an `id`, first occurrence wins.
fn cells_by_id(page: &Html) -> HashMap<&str, ElementRef<'_>> {
    static_selector!(ID_SELECTOR <- "[id]");
    let mut cells = HashMap::new();
    for element in page.select(&ID_SELECTOR) {
        if let Some(id) = element.value().id() {
            cells.entry(id).or_insert(element);
        }
    }
    cells
}
