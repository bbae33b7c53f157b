use crate::parsing::blocks::types::{Category, Item};

/// Plain text: the fallback when no other test matches.
///
/// The line is copied verbatim and plain text phrases get no wrapper.
pub struct Paragraph;

impl Paragraph {
    pub fn convert(line: &str) -> Item {
        Item::new(Category::PlainText, line)
    }
}
