use std::fmt::Display;

use super::MealLabel;

/// A single display line: either `[점심] 밥, 국` or a placeholder message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MenuLine(String);

impl MenuLine {
    pub fn meal(label: MealLabel, items: &str) -> Self {
        Self(format!("[{label}] {items}"))
    }

    pub fn placeholder(message: String) -> Self {
        Self(message)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MenuLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for MenuLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
