pub mod blocks;
pub mod parser;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

pub use parser::Parser;

use rope::numbered_lines;

/// Options for whole-document conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Drop empty and whitespace-only lines before they reach the parser.
    ///
    /// Off by default, in which case every blank line renders as `<hr/>`.
    pub skip_blank_lines: bool,
}

/// Feeds every line of the rope to a fresh [`Parser`] and renders the result.
pub fn convert_document(rope: &Rope, options: &ConvertOptions) -> String {
    let mut parser = Parser::new();
    let mut skipped = 0usize;

    for line in numbered_lines(rope) {
        if options.skip_blank_lines && line.text.trim().is_empty() {
            log::trace!("skipping blank line {}", line.number);
            skipped += 1;
            continue;
        }
        parser.parse(&line.text);
    }

    log::debug!(
        "converted document into {} phrases ({skipped} blank lines skipped)",
        parser.phrase_count()
    );
    parser.to_html()
}

/// Converts Markdown text held in a string.
pub fn convert_str(text: &str, options: &ConvertOptions) -> String {
    convert_document(&Rope::from(text), options)
}

/// Converts Markdown text with default options.
pub fn markdown_to_html(text: &str) -> String {
    convert_str(text, &ConvertOptions::default())
}
