use super::strip_leading_spaces;
use crate::parsing::blocks::types::{Category, Item};

/// ATX heading (`#` through `######`, and beyond).
///
/// The level is not capped: seven `#` produce an `<h7>` tag.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns the heading level when the line starts with `#`.
    pub fn level(line: &str) -> Option<usize> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        (level > 0).then_some(level)
    }

    pub fn convert(line: &str, level: usize) -> Item {
        // MARKER is one byte, so `level` is also a byte offset.
        let text = strip_leading_spaces(line.get(level..).unwrap_or_default());
        Item::new(
            Category::Heading(level),
            format!("<h{level}>{text}</h{level}>"),
        )
    }
}
