//! Manifest-driven pipeline: topic headers and article links, one line at a time.
//!
//! A manifest looks like
//!
//! ```text
//! Debate
//! http://www.cnn.com/2016/10/19/politics/debate-takeaways/index.html
//! http://www.nytimes.com/2016/10/20/us/politics/presidential-debate.html
//!
//! Economy
//! http://www.foxnews.com/politics/2016/10/19/jobs-report.html
//! ```
//!
//! Lines are handled strictly in order:
//!
//! - blank lines are ignored;
//! - a line without `http` is a topic header: `<output_dir>/<topic>` is created
//!   and its `summary.txt` cleared, and it becomes the active [`TopicContext`].
//!   Headers that are not a single plain directory name abort the run;
//! - any other line is a link. Links matching no configured site are skipped.
//!   Matching links are fetched, extracted, counted, classified and written
//!   under the active topic. A matching link with no active topic aborts the run.

use crate::analysis::{Lexicon, WordCounts, classify, count};
use crate::config::FetchFailurePolicy;
use crate::error::PipelineError;
use crate::models::{ArticleSummary, NewsArticle};
use crate::outputs::frequency::{frequency_path, write_frequency};
use crate::outputs::summary::{append_summary, reset_summary, summary_path};
use crate::scrapers::extract::extract;
use crate::scrapers::fetch::FetchDocument;
use crate::scrapers::{SiteConfig, resolve};
use crate::utils::truncate_for_log;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, instrument};

const LINK_MARKER: &str = "http";

/// One manifest line, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestLine<'a> {
    Blank,
    TopicHeader(&'a str),
    Link(&'a str),
}

impl<'a> ManifestLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            ManifestLine::Blank
        } else if line.contains(LINK_MARKER) {
            ManifestLine::Link(line)
        } else {
            ManifestLine::TopicHeader(line)
        }
    }
}

/// The active topic's output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicContext {
    pub name: String,
    pub output_dir: PathBuf,
    pub summary_path: PathBuf,
}

/// Counters for a finished run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub topics: usize,
    pub articles: usize,
    /// Links that matched no configured site.
    pub skipped_links: usize,
    /// Articles dropped under [`FetchFailurePolicy::Skip`].
    pub failed_fetches: usize,
}

enum ArticleOutcome {
    Written,
    FetchFailed,
}

/// Whether a topic header can be used as one directory directly under the output root.
pub fn is_valid_topic_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Count words and classify sentiment for one fetched article.
pub fn analyze(
    article: &NewsArticle,
    positive: &Lexicon,
    negative: &Lexicon,
) -> (WordCounts, ArticleSummary) {
    let blocks = extract(&article.raw_document, article.site);
    let counts = count(&blocks);
    let sentiment = classify(&counts.tokens, positive, negative);
    let summary = ArticleSummary::new(article, &counts, sentiment);
    (counts, summary)
}

/// Read the manifest file into memory.
pub async fn load_manifest(path: &Path) -> Result<String, PipelineError> {
    fs::read_to_string(path)
        .await
        .map_err(|e| PipelineError::io(path, e))
}

/// Drives the pipeline over a manifest, owning all per-run state.
pub struct Orchestrator<F> {
    fetcher: F,
    output_root: PathBuf,
    positive: Lexicon,
    negative: Lexicon,
    fetch_failure: FetchFailurePolicy,
    topic: Option<TopicContext>,
}

impl<F: FetchDocument> Orchestrator<F> {
    pub fn new(
        fetcher: F,
        output_root: impl Into<PathBuf>,
        positive: Lexicon,
        negative: Lexicon,
        fetch_failure: FetchFailurePolicy,
    ) -> Self {
        Self {
            fetcher,
            output_root: output_root.into(),
            positive,
            negative,
            fetch_failure,
            topic: None,
        }
    }

    /// The topic currently receiving output, if any header has been seen.
    #[cfg(test)]
    pub fn topic(&self) -> Option<&TopicContext> {
        self.topic.as_ref()
    }

    /// Process every manifest line in order.
    ///
    /// Outputs already written for earlier topics stay on disk when a later
    /// line fails.
    #[instrument(level = "info", skip_all, fields(output_root = %self.output_root.display()))]
    pub async fn run(&mut self, manifest: &str) -> Result<RunReport, PipelineError> {
        let mut report = RunReport::default();

        for (idx, raw_line) in manifest.lines().enumerate() {
            let line_no = idx + 1;
            match ManifestLine::parse(raw_line) {
                ManifestLine::Blank => {}
                ManifestLine::TopicHeader(name) => {
                    self.enter_topic(line_no, name).await?;
                    report.topics += 1;
                }
                ManifestLine::Link(url) => {
                    let Some(site) = resolve(url) else {
                        debug!(line_no, line = %truncate_for_log(url, 120), "No configured site; skipping");
                        report.skipped_links += 1;
                        continue;
                    };
                    let Some(topic) = self.topic.as_ref() else {
                        return Err(PipelineError::ManifestState {
                            line_no,
                            line: url.to_string(),
                        });
                    };
                    match self.process_article(topic, site, url).await? {
                        ArticleOutcome::Written => report.articles += 1,
                        ArticleOutcome::FetchFailed => report.failed_fetches += 1,
                    }
                }
            }
        }

        info!(
            topics = report.topics,
            articles = report.articles,
            skipped_links = report.skipped_links,
            failed_fetches = report.failed_fetches,
            "Manifest processed"
        );
        Ok(report)
    }

    /// Make `name` the active topic, creating its directory and clearing its summary.
    #[instrument(level = "info", skip(self))]
    async fn enter_topic(&mut self, line_no: usize, name: &str) -> Result<(), PipelineError> {
        if !is_valid_topic_name(name) {
            return Err(PipelineError::InvalidTopic {
                line_no,
                name: name.to_string(),
            });
        }
        let output_dir = self.output_root.join(name);
        fs::create_dir_all(&output_dir)
            .await
            .map_err(|e| PipelineError::io(&output_dir, e))?;

        let summary_path = summary_path(&output_dir);
        reset_summary(&summary_path).await?;

        info!(dir = %output_dir.display(), "Entered topic");
        self.topic = Some(TopicContext {
            name: name.to_string(),
            output_dir,
            summary_path,
        });
        Ok(())
    }

    #[instrument(level = "info", skip(self, topic, site), fields(topic = %topic.name, site = site.label))]
    async fn process_article(
        &self,
        topic: &TopicContext,
        site: &'static SiteConfig,
        url: &str,
    ) -> Result<ArticleOutcome, PipelineError> {
        let raw_document = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => match self.fetch_failure {
                FetchFailurePolicy::Halt => return Err(e.into()),
                FetchFailurePolicy::Skip => {
                    error!(url = %e.url(), error = %e, "Fetch failed; skipping article");
                    return Ok(ArticleOutcome::FetchFailed);
                }
            },
        };

        let article = NewsArticle {
            source: url.to_string(),
            site,
            raw_document,
        };
        let (counts, summary) = analyze(&article, &self.positive, &self.negative);

        let freq_path = frequency_path(&topic.output_dir, site, &site.title_for(url));
        write_frequency(&counts.table, &freq_path).await?;
        append_summary(&summary, &topic.summary_path).await?;

        info!(
            total_words = summary.total_words,
            unique_words = summary.unique_words,
            positive = summary.sentiment.positive_count,
            negative = summary.sentiment.negative_count,
            "Processed article"
        );
        Ok(ArticleOutcome::Written)
    }
}
