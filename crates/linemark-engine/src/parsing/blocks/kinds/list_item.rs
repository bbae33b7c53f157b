use super::strip_leading_spaces;
use crate::parsing::blocks::types::{Category, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    pub fn category(self) -> Category {
        match self {
            ListKind::Bullet => Category::ListBullet,
            ListKind::Numbered => Category::ListNumbered,
        }
    }

    /// Byte length of the marker stripped before the item text.
    fn marker_len(self) -> usize {
        match self {
            ListKind::Bullet => 1,
            ListKind::Numbered => 2,
        }
    }
}

/// A single list item line. Nesting is not tracked.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: &'static str = "*+-";
    pub const NUMBER_DELIMITER: char = '.';

    pub fn kind(line: &str) -> Option<ListKind> {
        let mut chars = line.chars();
        match chars.next() {
            Some(c) if Self::BULLETS.contains(c) => Some(ListKind::Bullet),
            Some(c) if c.is_ascii_digit() && chars.next() == Some(Self::NUMBER_DELIMITER) => {
                Some(ListKind::Numbered)
            }
            _ => None,
        }
    }

    /// The source ordinal of a numbered item is dropped; numbering comes from
    /// the enclosing `<ol>`.
    pub fn convert(line: &str, kind: ListKind) -> Item {
        let text = strip_leading_spaces(line.get(kind.marker_len()..).unwrap_or_default());
        Item::new(kind.category(), format!("<li>{text}</li>"))
    }
}
