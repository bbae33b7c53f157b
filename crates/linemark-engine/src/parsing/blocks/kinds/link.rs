use crate::parsing::blocks::types::{Category, Item};

/// The pieces of an inline `[text](href)` link found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParts<'a> {
    pub text: &'a str,
    pub href: &'a str,
    /// Everything after the closing `)`, copied verbatim.
    pub rest: &'a str,
}

/// A line rendered as a paragraph wrapping one inline link.
///
/// Text before the opening `[` is not part of the fragment.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: char = '[';
    pub const TEXT_CLOSE: char = ']';
    pub const HREF_OPEN: char = '(';
    pub const HREF_CLOSE: char = ')';

    /// Finds the first `[`, then the first `]`, `(` and `)` each after the
    /// previous one. Returns `None` if any of them is missing.
    pub fn find(line: &str) -> Option<LinkParts<'_>> {
        let text_open = line.find(Self::TEXT_OPEN)?;
        let text_start = text_open + Self::TEXT_OPEN.len_utf8();
        let text_close = text_start + line[text_start..].find(Self::TEXT_CLOSE)?;
        let after_text = text_close + Self::TEXT_CLOSE.len_utf8();
        let href_open = after_text + line[after_text..].find(Self::HREF_OPEN)?;
        let href_start = href_open + Self::HREF_OPEN.len_utf8();
        let href_close = href_start + line[href_start..].find(Self::HREF_CLOSE)?;

        Some(LinkParts {
            text: &line[text_start..text_close],
            href: &line[href_start..href_close],
            rest: &line[href_close + Self::HREF_CLOSE.len_utf8()..],
        })
    }

    pub fn convert(parts: LinkParts<'_>) -> Item {
        Item::new(
            Category::Link,
            format!(
                "<p><a href=\"{}\">{}</a>{}</p>",
                parts.href, parts.text, parts.rest
            ),
        )
    }
}
