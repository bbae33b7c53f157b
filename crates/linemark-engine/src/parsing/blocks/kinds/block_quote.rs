use super::strip_leading_spaces;
use crate::parsing::blocks::types::{Category, Item};

/// A single-level blockquote line.
///
/// The `<blockquote>` wrapper belongs to the phrase, so the item fragment is
/// the bare quoted text. A second `>` is kept as content.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Returns the quoted text with the prefix and following spaces removed.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(strip_leading_spaces)
    }

    pub fn convert(line: &str) -> Item {
        Item::new(Category::Blockquote, Self::strip(line).unwrap_or(line))
    }
}
