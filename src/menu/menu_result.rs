use std::slice::Iter;

use chrono::NaiveDate;

use super::{MenuLine, Restaurant};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RestaurantMenu {
    restaurant: Restaurant,
    lines: Vec<MenuLine>,
    placeholder: bool,
}

impl RestaurantMenu {
    pub(crate) fn new(restaurant: Restaurant, lines: Vec<MenuLine>) -> Self {
        Self {
            restaurant,
            lines,
            placeholder: false,
        }
    }

    pub(crate) fn placeholder(restaurant: Restaurant, line: MenuLine) -> Self {
        Self {
            restaurant,
            lines: vec![line],
            placeholder: true,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.restaurant.name()
    }

    pub fn lines(&self) -> &[MenuLine] {
        &self.lines
    }

    /// True when the lines are a "no data" message rather than a menu.
    pub const fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// Menus of every restaurant for one date, in restaurant table order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RestaurantMenuResult {
    date: NaiveDate,
    restaurants: Vec<RestaurantMenu>,
}

impl RestaurantMenuResult {
    pub(crate) fn new(date: NaiveDate, restaurants: Vec<RestaurantMenu>) -> Self {
        Self { date, restaurants }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn iter(&self) -> Iter<RestaurantMenu> {
        self.restaurants.iter()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&[MenuLine]> {
        self.restaurants
            .iter()
            .find(|menu| menu.name() == name)
            .map(RestaurantMenu::lines)
    }

    /// Whether any restaurant produced a real menu line.
    pub fn has_menu(&self) -> bool {
        self.restaurants.iter().any(|menu| !menu.is_placeholder())
    }
}
