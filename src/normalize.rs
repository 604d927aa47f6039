//! Cleanup of the text fragments scraped from a menu table.
//!
//! The site writes prices as `￦` followed by the amount, and the separators it
//! puts between items sometimes collide with the currency sign (`￦,`) or leave
//! a trailing comma on the member price marker (`(조합원),`).

use crate::menu::{MealLabel, MenuLine};

const MEMBER_MARKER: &str = "(조합원)";
const MEMBER_MARKER_WITH_COMMA: &str = "(조합원),";
const WON_COMMA: &str = "￦,";
const WON_SPACE: &str = "￦ ";
const SEPARATOR: &str = ", ";

/// Trims one scraped component and drops the comma glued to a bare member
/// marker. Text inside the component is kept as is.
pub fn cleanup_component(text: &str) -> String {
    let text = text.trim();
    if text == MEMBER_MARKER_WITH_COMMA {
        MEMBER_MARKER.to_string()
    } else {
        text.to_string()
    }
}

/// Fixes separator artifacts in a line of comma joined components.
///
/// `￦,` is rewritten before splitting; afterwards each part loses a trailing
/// comma if it is a price, and the member marker loses its comma.
pub fn refine_final_menu_string(raw_menu_line: &str) -> String {
    let line = raw_menu_line.replace(WON_COMMA, WON_SPACE);
    line.split(SEPARATOR)
        .map(|part| {
            let part = part.trim();
            if part.starts_with(WON_SPACE) && part.ends_with(',') {
                &part[..part.len() - 1]
            } else if part == MEMBER_MARKER_WITH_COMMA {
                MEMBER_MARKER
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Builds the display line for one meal from its cleaned components.
pub fn menu_line<S: AsRef<str>>(label: MealLabel, components: &[S]) -> MenuLine {
    let raw = components
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    MenuLine::meal(label, &refine_final_menu_string(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_component() {
        assert_eq!(cleanup_component("  밥 "), "밥");
        assert_eq!(cleanup_component("(조합원),"), "(조합원)");
        assert_eq!(cleanup_component(" (조합원), "), "(조합원)");
        assert_eq!(cleanup_component("(조합원)"), "(조합원)");
        assert_eq!(cleanup_component("돈까스\n    정식 "), "돈까스\n    정식");
    }

    #[test]
    fn test_cleanup_keeps_inner_whitespace() {
        assert_eq!(cleanup_component("김치  볶음밥"), "김치  볶음밥");
        assert_eq!(cleanup_component("김치\u{a0}찌개"), "김치\u{a0}찌개");
        assert_eq!(cleanup_component("\t우동\t"), "우동");
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        for input in ["  밥 ", "(조합원),", "￦ 5,000,", "", "-", "제육\n 볶음 ", "(조합원),,"] {
            let once = cleanup_component(input);
            assert_eq!(cleanup_component(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_won_comma_collision() {
        assert_eq!(refine_final_menu_string("밥, ￦,5,000"), "밥, ￦ 5,000");
    }

    #[test]
    fn test_trailing_comma_on_price() {
        assert_eq!(refine_final_menu_string("밥, ￦ 5,000,, 국"), "밥, ￦ 5,000, 국");
        assert_eq!(refine_final_menu_string("￦ 4,500,"), "￦ 4,500");
    }

    #[test]
    fn test_member_marker_part() {
        assert_eq!(refine_final_menu_string("밥, (조합원),, 국"), "밥, (조합원), 국");
        assert_eq!(refine_final_menu_string("밥, (조합원),"), "밥, (조합원)");
    }

    #[test]
    fn test_non_price_trailing_comma_is_kept() {
        assert_eq!(refine_final_menu_string("밥,"), "밥,");
        assert_eq!(refine_final_menu_string("5,000,"), "5,000,");
    }

    #[test]
    fn test_refine_is_idempotent() {
        for input in [
            "밥, 국, (조합원)",
            "밥, ￦,5,000",
            "￦ 4,500,",
            "밥, (조합원),",
            "김치볶음밥, ￦ 3,000, (조합원), ￦ 2,500",
        ] {
            let once = refine_final_menu_string(input);
            assert_eq!(refine_final_menu_string(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_menu_line() {
        let line = menu_line(MealLabel::Lunch, &["밥", "국", "(조합원)"]);
        assert_eq!(line, "[점심] 밥, 국, (조합원)");
        let line = menu_line(MealLabel::Dinner, &["돈까스".to_string(), "￦,4,000".to_string()]);
        assert_eq!(line, "[저녁] 돈까스, ￦ 4,000");
    }
}
