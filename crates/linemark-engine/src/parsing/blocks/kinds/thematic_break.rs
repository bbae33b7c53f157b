use crate::parsing::blocks::types::{Category, Item};

/// Horizontal rule made of `*` and `-` separated by any spaces.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 2] = ['*', '-'];
    pub const HTML: &'static str = "<hr/>";

    /// True when every non-space character is a rule marker.
    ///
    /// An empty or all-space line has no offending character and so matches.
    pub fn matches(line: &str) -> bool {
        line.chars().all(|c| c == ' ' || Self::MARKERS.contains(&c))
    }

    /// The fragment never reflects the line's content.
    pub fn convert() -> Item {
        Item::new(Category::HorizontalRule, Self::HTML)
    }
}
