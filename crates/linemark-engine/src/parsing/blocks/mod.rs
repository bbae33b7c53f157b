//! # Block Parsing
//!
//! Two-phase, line-at-a-time block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is given a [`Category`]
//!    by fixed-precedence tests, then converted to an [`Item`] holding its
//!    HTML fragment
//!
//! 2. **Phrase Grouping** (`builder`): a [`PhraseBuilder`] appends each item
//!    to the trailing [`Phrase`] when the category matches, otherwise opens a
//!    new phrase
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Category`, `Item`, `Phrase`)
//! - **`kinds`**: Block-specific detection and conversion with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` picks a category and converts
//! - **`builder`**: `PhraseBuilder` groups items and renders them
//!
//! ## Key Invariants
//!
//! - A phrase is never empty
//! - Adjacent phrases never share a category
//! - No multi-line lookahead; nesting is not tracked

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::PhraseBuilder;
pub use classify::MarkdownLineClassifier;
pub use types::{Category, Item, Phrase};
