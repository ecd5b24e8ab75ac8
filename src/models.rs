//! Data carried between pipeline stages for a single article.
//!
//! - [`NewsArticle`]: a fetched article before analysis
//! - [`ArticleSummary`]: counts and sentiment written to the topic summary

use crate::analysis::{SentimentResult, WordCounts};
use crate::scrapers::SiteConfig;

/// A fetched article awaiting analysis.
///
/// The raw document lives only as long as one pass through the pipeline.
#[derive(Debug)]
pub struct NewsArticle {
    /// The source URL of the article.
    pub source: String,
    /// Registry entry the URL resolved to.
    pub site: &'static SiteConfig,
    /// The raw HTML returned by the fetch.
    pub raw_document: String,
}

/// Everything recorded about one article in its topic's summary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    /// Site label, e.g. `cnn`.
    pub site: String,
    /// The source URL of the article.
    pub url: String,
    pub total_words: u64,
    pub unique_words: u64,
    pub sentiment: SentimentResult,
}

impl ArticleSummary {
    pub fn new(article: &NewsArticle, counts: &WordCounts, sentiment: SentimentResult) -> Self {
        Self {
            site: article.site.label.to_string(),
            url: article.source.clone(),
            total_words: counts.total_words,
            unique_words: counts.unique_words,
            sentiment,
        }
    }
}
