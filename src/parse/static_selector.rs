use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector parsed on first use. Declared with [`static_selector!`].
///
/// The menu page is walked with a handful of fixed selectors (`[id]` to index
/// the menu cells, `p` for the items inside a cell). Declaring them as statics
/// parses each one once per process instead of once per query.
#[derive(Debug)]
pub(crate) struct StaticSelector {
    cell: OnceLock<Selector>,
    css: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(css: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            css,
        }
    }

    /// Panics if `css` is not a valid selector; every caller passes a literal.
    fn selector(&self) -> &Selector {
        self.cell.get_or_init(|| {
            Selector::parse(self.css)
                .unwrap_or_else(|e| panic!("Error parsing static selector {}: {e:?}", self.css))
        })
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.selector()
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
