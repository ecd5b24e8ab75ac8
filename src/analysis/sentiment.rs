//! Lexicon-based sentiment tally.

use crate::analysis::lexicon::Lexicon;

/// Positive/negative matches for one article.
///
/// The word lists keep every matching token in encounter order, duplicates
/// included.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SentimentResult {
    pub positive_count: u64,
    pub negative_count: u64,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
}

/// Look every token up in both lexicons independently.
///
/// Iterates the full token stream (not the deduplicated table), so a word
/// repeated three times counts three times. When the lexicons overlap, a
/// token can count as both positive and negative.
pub fn classify<I, S>(tokens: I, positive: &Lexicon, negative: &Lexicon) -> SentimentResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = SentimentResult::default();

    for token in tokens {
        let token = token.as_ref();
        if positive.contains(token) {
            result.positive_count += 1;
            result.positive_words.push(token.to_string());
        }
        if negative.contains(token) {
            result.negative_count += 1;
            result.negative_words.push(token.to_string());
        }
    }

    result
}
