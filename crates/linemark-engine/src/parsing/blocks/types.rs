/// The syntactic category assigned to a single line.
///
/// Heading levels are ordered; every other variant is a plain tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// An ATX heading. The level is the count of leading `#` and is not
    /// capped at 6.
    Heading(usize),
    /// A `*`, `+` or `-` list item.
    ListBullet,
    /// A `<digit>.` list item.
    ListNumbered,
    /// A line indented by four spaces or one tab.
    CodeBlock,
    /// A line containing an inline `[text](href)` link.
    Link,
    /// Default when no other test matches.
    PlainText,
    /// A `>` quoted line.
    Blockquote,
    /// A line made only of `*`, `-` and spaces.
    HorizontalRule,
}

impl Category {
    /// Opening tag wrapped around a whole phrase of this category.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::ListBullet => "<ul>",
            Category::ListNumbered => "<ol>",
            Category::CodeBlock => "<pre>",
            Category::Blockquote => "<blockquote>",
            Category::Heading(_)
            | Category::Link
            | Category::PlainText
            | Category::HorizontalRule => "",
        }
    }

    /// Closing tag wrapped around a whole phrase of this category.
    pub fn suffix(self) -> &'static str {
        match self {
            Category::ListBullet => "</ul>",
            Category::ListNumbered => "</ol>",
            Category::CodeBlock => "</pre>",
            Category::Blockquote => "</blockquote>",
            Category::Heading(_)
            | Category::Link
            | Category::PlainText
            | Category::HorizontalRule => "",
        }
    }
}

/// One converted line: its category and the HTML fragment it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    category: Category,
    fragment: String,
}

impl Item {
    pub fn new(category: Category, fragment: impl Into<String>) -> Self {
        Self {
            category,
            fragment: fragment.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

/// A maximal run of consecutive items sharing one category.
///
/// A phrase is never empty: it can only be created from a first item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    category: Category,
    items: Vec<Item>,
}

impl Phrase {
    pub fn new(first: Item) -> Self {
        Self {
            category: first.category(),
            items: vec![first],
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item back if its category does not match this phrase.
    pub(crate) fn try_push(&mut self, item: Item) -> Result<(), Item> {
        if item.category() != self.category {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Writes `prefix + fragments + suffix` to `out`.
    pub fn render_into(&self, out: &mut String) {
        out.push_str(self.category.prefix());
        for item in &self.items {
            out.push_str(item.fragment());
        }
        out.push_str(self.category.suffix());
    }
}
