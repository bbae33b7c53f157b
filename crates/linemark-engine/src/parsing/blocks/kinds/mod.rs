pub mod block_quote;
pub mod code_line;
pub mod heading;
pub mod link;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_line::CodeLine;
pub use heading::Heading;
pub use link::{Link, LinkParts};
pub use list_item::{ListItem, ListKind};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;

/// Strips leading space characters one at a time until none remain.
///
/// Only `' '` is stripped; tabs and other whitespace are content.
pub(crate) fn strip_leading_spaces(s: &str) -> &str {
    s.trim_start_matches(' ')
}
