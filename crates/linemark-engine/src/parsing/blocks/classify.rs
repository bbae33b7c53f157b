use super::{
    kinds::{BlockQuote, CodeLine, Heading, Link, ListItem, ListKind, Paragraph, ThematicBreak},
    types::{Category, Item},
};

/// Classifies and converts individual lines.
///
/// This is phase 1 of parsing: each line is looked at on its own, with no
/// lookahead and no memory of earlier lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Picks the category of a line. The first matching test wins:
    /// heading, horizontal rule, list item, code line, link, blockquote,
    /// then plain text.
    pub fn classify(&self, line: &str) -> Category {
        if let Some(level) = Heading::level(line) {
            return Category::Heading(level);
        }
        if ThematicBreak::matches(line) {
            return Category::HorizontalRule;
        }
        if let Some(kind) = ListItem::kind(line) {
            return kind.category();
        }
        if CodeLine::strip(line).is_some() {
            return Category::CodeBlock;
        }
        if Link::find(line).is_some() {
            return Category::Link;
        }
        if BlockQuote::strip(line).is_some() {
            return Category::Blockquote;
        }
        Category::PlainText
    }

    /// Converts a line already classified as `category` into an [`Item`].
    ///
    /// A category that does not fit the line degrades to plain text for
    /// links and to the unstripped line elsewhere; it never panics.
    pub fn convert(&self, line: &str, category: Category) -> Item {
        match category {
            Category::Heading(level) => Heading::convert(line, level),
            Category::HorizontalRule => ThematicBreak::convert(),
            Category::ListBullet => ListItem::convert(line, ListKind::Bullet),
            Category::ListNumbered => ListItem::convert(line, ListKind::Numbered),
            Category::CodeBlock => CodeLine::convert(line),
            Category::Link => match Link::find(line) {
                Some(parts) => Link::convert(parts),
                None => Paragraph::convert(line),
            },
            Category::Blockquote => BlockQuote::convert(line),
            Category::PlainText => Paragraph::convert(line),
        }
    }

    /// Classifies then converts.
    pub fn item(&self, line: &str) -> Item {
        self.convert(line, self.classify(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const C: MarkdownLineClassifier = MarkdownLineClassifier;

    #[rstest]
    #[case("# a", Category::Heading(1))]
    #[case("###### a", Category::Heading(6))]
    #[case("***", Category::HorizontalRule)]
    #[case("- - -", Category::HorizontalRule)]
    #[case("*   Red", Category::ListBullet)]
    #[case("+ Red", Category::ListBullet)]
    #[case("3. Red", Category::ListNumbered)]
    #[case("    code", Category::CodeBlock)]
    #[case("\tcode", Category::CodeBlock)]
    #[case("[a](b)", Category::Link)]
    #[case("> quote", Category::Blockquote)]
    #[case(" beep", Category::PlainText)]
    #[case("just text", Category::PlainText)]
    fn classifies(#[case] line: &str, #[case] expected: Category) {
        assert_eq!(C.classify(line), expected);
    }

    #[test]
    fn heading_beats_link() {
        assert_eq!(C.classify("# [a](b)"), Category::Heading(1));
    }

    #[test]
    fn rule_beats_list() {
        assert_eq!(C.classify("* * *"), Category::HorizontalRule);
        assert_eq!(C.classify("-"), Category::HorizontalRule);
    }

    #[test]
    fn list_beats_link() {
        assert_eq!(C.item("- [a](b)").fragment(), "<li>[a](b)</li>");
    }

    #[test]
    fn code_beats_link() {
        assert_eq!(C.item("    [a](b)").fragment(), "<code>[a](b)</code>");
    }

    #[test]
    fn link_beats_blockquote() {
        assert_eq!(C.classify("> [a](b)"), Category::Link);
    }

    #[test]
    fn blank_lines_are_rules() {
        assert_eq!(C.classify(""), Category::HorizontalRule);
        assert_eq!(C.classify("    "), Category::HorizontalRule);
    }

    #[test]
    fn degenerate_lines_never_panic() {
        for line in ["#", "1", "1.", ">", "[", "[]", "[](", "\t", "é", "1é", "#é"] {
            let _ = C.item(line);
        }
    }

    #[test]
    fn mismatched_category_falls_back() {
        assert_eq!(C.convert("no link", Category::Link), Paragraph::convert("no link"));
        assert_eq!(C.convert("plain", Category::Blockquote).fragment(), "plain");
    }

    #[test]
    fn seven_markers_overflow_heading_levels() {
        assert_eq!(C.item("####### deep").fragment(), "<h7>deep</h7>");
    }
}
