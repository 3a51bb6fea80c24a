//! Extraction of structured dictionary entries from Weblio content pages.
//!
//! The input is a `NetDicHead`/`NetDicBody` node pair from a parsed page.
//! Weblio encodes entry structure through ad-hoc inline styles and
//! full-width punctuation rather than a formal grammar, so the pipeline is:
//! classify the pair into one of five observed layouts, decompose the body
//! into a tree of definition lines, pull tagged fragments out of each line's
//! raw text, and render the result as a compact flashcard gloss.
//!
//! Everything here is synchronous and never touches the network; fetching
//! and host integration live in the sibling crates.

pub mod entry;
pub mod layout;
pub mod line;
mod node;
pub mod patterns;
pub mod render;

#[cfg(test)]
pub(crate) mod test_util;

pub use entry::DictionaryEntry;
pub use layout::{EntryLayout, classify};
pub use line::DefinitionLine;
pub use patterns::ExtractedText;
pub use render::SUB_DEF_CNT;
