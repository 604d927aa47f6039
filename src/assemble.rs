use chrono::NaiveDate;

use crate::date::{is_weekend, korean_weekday_name};
use crate::menu::{MenuLine, RestaurantMenu, RestaurantMenuResult, RESTAURANTS};
use crate::normalize::menu_line;
use crate::parse::ExtractedMeal;

/// Groups extracted meals by restaurant and fills every restaurant without a
/// menu with a "no data" line for `target`.
pub fn assemble(meals: &[ExtractedMeal], target: NaiveDate) -> RestaurantMenuResult {
    let restaurants = RESTAURANTS
        .iter()
        .map(|&restaurant| {
            let lines: Vec<MenuLine> = meals
                .iter()
                .filter(|meal| meal.slot.restaurant == restaurant)
                .map(|meal| menu_line(meal.slot.label, meal.components.as_slice()))
                .collect();
            if lines.is_empty() {
                RestaurantMenu::placeholder(restaurant, placeholder_line(target))
            } else {
                RestaurantMenu::new(restaurant, lines)
            }
        })
        .collect();
    let result = RestaurantMenuResult::new(target, restaurants);

    if !result.has_menu() && !is_weekend(target) {
        tracing::warn!(date = %target, "no menu found for any restaurant");
    }
    result
}

fn placeholder_line(target: NaiveDate) -> MenuLine {
    let weekday = korean_weekday_name(target);
    let message = if is_weekend(target) {
        format!("{weekday}요일은 주말 메뉴 정보가 제공되지 않습니다.")
    } else {
        format!("{weekday}요일에는 해당 식당의 메뉴 정보가 없습니다.")
    };
    MenuLine::placeholder(message)
}
