use crate::parsing::blocks::types::{Category, Item};

/// An indented code line.
///
/// Exactly one indent layer is removed, so deeper indentation survives in the
/// output.
pub struct CodeLine;

impl CodeLine {
    pub const INDENT: &'static str = "    ";
    pub const TAB: char = '\t';

    /// Returns the line with its single indent prefix removed.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::INDENT)
            .or_else(|| line.strip_prefix(Self::TAB))
    }

    pub fn convert(line: &str) -> Item {
        let code = Self::strip(line).unwrap_or(line);
        Item::new(Category::CodeBlock, format!("<code>{code}</code>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_spaces() {
        assert_eq!(CodeLine::strip("    let x;"), Some("let x;"));
    }

    #[test]
    fn one_tab() {
        assert_eq!(CodeLine::strip("\tlet x;"), Some("let x;"));
    }

    #[test]
    fn strips_one_layer_only() {
        assert_eq!(
            CodeLine::convert("        beep").fragment(),
            "<code>    beep</code>"
        );
        assert_eq!(CodeLine::strip("\t\tbeep"), Some("\tbeep"));
        assert_eq!(CodeLine::strip("    \tbeep"), Some("\tbeep"));
    }

    #[test]
    fn short_indent_is_not_code() {
        assert_eq!(CodeLine::strip(" beep"), None);
        assert_eq!(CodeLine::strip("   beep"), None);
    }
}
