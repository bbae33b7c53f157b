use super::blocks::{Item, MarkdownLineClassifier, Phrase, PhraseBuilder};

/// Accumulates lines into a document and renders it to HTML.
///
/// Each [`Parser::parse`] call appends exactly one item. The document only
/// grows; [`Parser::to_html`] can be called at any point and reflects
/// everything ingested so far.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    classifier: MarkdownLineClassifier,
    builder: PhraseBuilder,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies, converts and appends one line. Never fails: anything
    /// unrecognised becomes plain text.
    pub fn parse(&mut self, line: &str) {
        let item = self.classifier.item(line);
        self.append(item);
    }

    pub fn append(&mut self, item: Item) {
        self.builder.push(item);
    }

    pub fn phrases(&self) -> &[Phrase] {
        self.builder.phrases()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases().len()
    }

    pub fn to_html(&self) -> String {
        self.builder.render()
    }
}
