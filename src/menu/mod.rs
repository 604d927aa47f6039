mod menu_line;
mod menu_result;
mod restaurant;

pub use menu_line::MenuLine;
pub use menu_result::{RestaurantMenu, RestaurantMenuResult};
pub use restaurant::{MealLabel, MealSlot, Restaurant, MEAL_SLOTS, RESTAURANTS};
