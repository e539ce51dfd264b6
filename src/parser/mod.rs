//! Markup and plain-text parsing helpers shared by the analyzers

pub mod markup;
pub mod text;

pub use markup::{count_headings, has_emphasis_markup, has_list_markup, strip_markup, HeadingCounts};
pub use text::{normalize_word, sentences, word_count, words};
