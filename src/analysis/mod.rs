//! Lexical analysis of extracted article text.
//!
//! - [`frequency`]: whitespace tokenizing and word-frequency tables
//! - [`lexicon`]: loading sorted sentiment word lists
//! - [`search`]: windowed binary search used for lexicon lookups
//! - [`sentiment`]: positive/negative tallies over the token stream

pub mod frequency;
pub mod lexicon;
pub mod search;
pub mod sentiment;

pub use frequency::{FrequencyTable, WordCounts, count};
pub use lexicon::Lexicon;
pub use sentiment::{SentimentResult, classify};
