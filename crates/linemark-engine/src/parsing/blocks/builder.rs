use super::types::{Item, Phrase};

/// Groups converted items into phrases.
///
/// An item joins the trailing phrase when the categories match; otherwise it
/// opens a new one. Phrases are never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct PhraseBuilder {
    phrases: Vec<Phrase>,
}

impl PhraseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        let item = match self.phrases.last_mut() {
            Some(last) => match last.try_push(item) {
                Ok(()) => return,
                Err(item) => item,
            },
            None => item,
        };

        log::trace!(
            "opening phrase #{} for {:?}",
            self.phrases.len() + 1,
            item.category()
        );
        self.phrases.push(Phrase::new(item));
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for phrase in &self.phrases {
            phrase.render_into(&mut out);
        }
        out
    }
}
