//! Sorted sentiment word lists.
//!
//! Files hold one word per line. Blank lines and any line containing `;`
//! (the comment marker used by the published opinion-lexicon headers) are
//! skipped. The loader never sorts: lookups use binary search, so the file
//! must already be in ascending byte order. Order is verified once at load
//! unless the caller opts out, in which case an unsorted file silently
//! produces wrong matches.

use crate::analysis::search::binary_search;
use crate::error::LexiconError;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

const COMMENT_MARKER: char = ';';

/// An immutable, ascending list of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Read and parse a lexicon file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>, verify_order: bool) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .await
            .map_err(|source| LexiconError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let lexicon = Self::parse(&text, path, verify_order)?;
        info!(words = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    /// Parse lexicon text; `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path, verify_order: bool) -> Result<Self, LexiconError> {
        let mut words: Vec<String> = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() || word.contains(COMMENT_MARKER) {
                continue;
            }
            if verify_order {
                if let Some(previous) = words.last() {
                    if previous.as_str() > word {
                        return Err(LexiconError::Unsorted {
                            path: origin.to_path_buf(),
                            line: line_no + 1,
                            previous: previous.clone(),
                            word: word.to_string(),
                        });
                    }
                }
            }
            words.push(word.to_string());
        }

        Ok(Self { words })
    }

    /// Build a lexicon from words already in ascending order.
    #[cfg(test)]
    pub fn from_sorted<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if let Some(pos) = words.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(LexiconError::Unsorted {
                path: std::path::PathBuf::from("<memory>"),
                line: pos + 2,
                previous: words[pos].clone(),
                word: words[pos + 1].clone(),
            });
        }
        Ok(Self { words })
    }

    /// Binary-search membership test.
    pub fn contains(&self, word: &str) -> bool {
        binary_search(&self.words, word, None).is_some()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const POSITIVE: &str = ";;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;;
; Opinion Lexicon: Positive
;
; header lines contain semicolons

a+
abound
abounds

good
great
";

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let lex = Lexicon::parse(POSITIVE, Path::new("positive.txt"), true).unwrap();
        assert_eq!(lex.words(), &["a+", "abound", "abounds", "good", "great"]);
        assert!(lex.contains("good"));
        assert!(!lex.contains("bad"));
    }

    #[test]
    fn test_parse_rejects_unsorted_when_verifying() {
        let err = Lexicon::parse("good\nbad\n", Path::new("neg.txt"), true).unwrap_err();
        match err {
            LexiconError::Unsorted {
                line,
                previous,
                word,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(previous, "good");
                assert_eq!(word, "bad");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_keeps_file_order_without_verification() {
        let lex = Lexicon::parse("good\nbad\n", Path::new("neg.txt"), false).unwrap();
        assert_eq!(lex.words(), &["good", "bad"]);
    }

    #[test]
    fn test_from_sorted() {
        assert!(Lexicon::from_sorted(["bad", "sad", "sad"]).is_ok());
        assert!(Lexicon::from_sorted(["sad", "bad"]).is_err());
        assert!(Lexicon::from_sorted(Vec::<String>::new()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{POSITIVE}").unwrap();
        let lex = Lexicon::load(file.path(), true).await.unwrap();
        assert_eq!(lex.len(), 5);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Lexicon::load("/definitely/not/here.txt", true).await.unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
