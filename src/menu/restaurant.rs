use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Restaurant {
    code: &'static str, // ex. 18 for 한빛식당
    name: &'static str,
}

impl Restaurant {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

const HANBIT: Restaurant = Restaurant::new("18", "한빛식당");
const BYEOLBIT: Restaurant = Restaurant::new("19", "별빛식당");
const EUNHASU: Restaurant = Restaurant::new("20", "은하수식당");

pub const RESTAURANTS: [Restaurant; 3] = [HANBIT, BYEOLBIT, EUNHASU];

#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum MealLabel {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealLabel {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Breakfast => "아침",
            Self::Lunch => "점심",
            Self::Dinner => "저녁",
        }
    }
}

impl Display for MealLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.korean())
    }
}

/// One meal served by one restaurant. The site keys its weekly tables by the
/// restaurant code and an opaque time range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealSlot {
    pub restaurant: Restaurant,
    pub time_range: &'static str,
    pub label: MealLabel,
}

const fn slot(restaurant: Restaurant, time_range: &'static str, label: MealLabel) -> MealSlot {
    MealSlot {
        restaurant,
        time_range,
        label,
    }
}

pub const MEAL_SLOTS: [MealSlot; 6] = [
    slot(HANBIT, "9-17", MealLabel::Breakfast),
    slot(HANBIT, "8-16", MealLabel::Lunch),
    slot(HANBIT, "10-18", MealLabel::Dinner),
    slot(BYEOLBIT, "7-14", MealLabel::Lunch),
    slot(EUNHASU, "6-12", MealLabel::Breakfast),
    slot(EUNHASU, "13-25", MealLabel::Lunch),
];
