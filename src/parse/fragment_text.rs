use scraper::ElementRef;

use crate::normalize::cleanup_component;
use crate::static_selector;

/// The site fills empty cells with a lone dash.
const EMPTY_CELL: &str = "-";

/// Raw menu components inside one menu cell, cleaned and in document order.
///
/// Cells usually hold one `<p>` per item. Some put the items straight into
/// the cell separated by `<br>`, so without paragraphs the cell text is split
/// into lines instead.
pub fn fragment_components(element: ElementRef) -> Vec<String> {
    static_selector!(PARAGRAPH_SELECTOR <- "p");
    let mut paragraphs = element.select(&PARAGRAPH_SELECTOR).peekable();
    let raw: Vec<String> = if paragraphs.peek().is_some() {
        paragraphs.map(paragraph_text).collect()
    } else {
        element
            .text()
            .flat_map(str::lines)
            .map(str::to_string)
            .collect()
    };
    raw.iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty() && *text != EMPTY_CELL)
        .map(cleanup_component)
        .collect()
}

/// Every text node trimmed and glued together.
fn paragraph_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn components_of(html: &str) -> Vec<String> {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse("#cell").unwrap();
        let cell = document.select(&selector).next().expect("fixture should have a cell");
        fragment_components(cell)
    }

    #[test]
    fn test_paragraphs() {
        let components =
            components_of(r#"<div id="cell"><p>밥</p><p> 국 </p><p>-</p><p>(조합원),</p></div>"#);
        assert_eq!(components, ["밥", "국", "(조합원)"]);
    }

    #[test]
    fn test_paragraph_with_nested_markup() {
        let components =
            components_of(r#"<div id="cell"><p><span>제육</span> <b>볶음</b></p><p></p></div>"#);
        assert_eq!(components, ["제육볶음"]);
    }

    #[test]
    fn test_line_fallback() {
        let components = components_of(
            "<div id=\"cell\">\n  잡곡밥<br>  된장찌개 <br>-<br>\n\n 깍두기\n</div>",
        );
        assert_eq!(components, ["잡곡밥", "된장찌개", "깍두기"]);
    }

    #[test]
    fn test_empty_cell() {
        assert!(components_of(r#"<div id="cell">-</div>"#).is_empty());
        assert!(components_of(r#"<div id="cell">   </div>"#).is_empty());
        assert!(components_of(r#"<div id="cell"><p>-</p><p> </p></div>"#).is_empty());
    }
}
