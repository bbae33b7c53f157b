pub mod io;
pub mod parsing;


// Re-export key types for easier usage
pub use io::*;
pub use parsing::blocks::{Category, Item, Phrase};
pub use parsing::{ConvertOptions, Parser, convert_document, convert_str, markdown_to_html};
