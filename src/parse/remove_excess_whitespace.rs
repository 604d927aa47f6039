use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Collapses every whitespace run (including line breaks and nbsp) to a single space.
pub fn remove_excess_whitespace<'a>(s: &'a str) -> Cow<'a, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s{2,}|[^\S ]").expect("regex should be valid"));
    let out: Cow<'a, str> = Regex::replace_all(re, s, " ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs() {
        assert_eq!(remove_excess_whitespace("제육\n      볶음"), "제육 볶음");
        assert_eq!(remove_excess_whitespace("김치\u{a0}찌개"), "김치 찌개");
        assert_eq!(remove_excess_whitespace("a\tb"), "a b");
    }

    #[test]
    fn test_leaves_single_spaces_borrowed() {
        let out = remove_excess_whitespace("￦ 5,000 원");
        assert_eq!(out, "￦ 5,000 원");
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
