//! Tokenizing paragraph blocks and counting word frequencies.

use std::collections::HashMap;
use tracing::debug;

/// Token produced by stripping the punctuation out of an em-dash (`--`).
/// It never survives into a finished table.
pub const DASH_TOKEN: &str = "--";

/// Word → occurrence count, iterated in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`. Returns `true` if it was not yet present.
    pub fn increment(&mut self, word: &str) -> bool {
        match self.index.get(word) {
            Some(&slot) => {
                self.entries[slot].1 += 1;
                false
            }
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
                true
            }
        }
    }

    /// Remove `word`, returning its count if it was present.
    pub fn remove(&mut self, word: &str) -> Option<u64> {
        let slot = self.index.remove(word)?;
        let (_, count) = self.entries.remove(slot);
        for later in self.index.values_mut() {
            if *later > slot {
                *later -= 1;
            }
        }
        Some(count)
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(word, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for word in iter {
            table.increment(word);
        }
        table
    }
}

/// Result of tokenizing one article.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCounts {
    pub table: FrequencyTable,
    /// Every token seen, repeats included.
    pub total_words: u64,
    /// Distinct tokens seen.
    pub unique_words: u64,
    /// Lowercased tokens in document order, for sentiment classification.
    pub tokens: Vec<String>,
}

/// Split blocks on whitespace, lowercase each token and count it.
///
/// `total_words` and `unique_words` are accumulated before the `--` key is
/// dropped from the table, so an article containing `--` reports one more
/// unique word than its table holds. Downstream reports depend on these
/// numbers as-is.
pub fn count<S: AsRef<str>>(blocks: &[S]) -> WordCounts {
    let mut counts = WordCounts::default();

    for block in blocks {
        for token in block.as_ref().split_whitespace() {
            let word = token.to_lowercase();
            counts.total_words += 1;
            if counts.table.increment(&word) {
                counts.unique_words += 1;
            }
            counts.tokens.push(word);
        }
    }

    if let Some(dashes) = counts.table.remove(DASH_TOKEN) {
        debug!(dashes, "Dropped em-dash token from frequency table");
    }

    counts
}
