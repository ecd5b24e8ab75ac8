//! The per-topic `summary.txt` file.
//!
//! The file is cleared when its topic header is (re)entered and then gets one
//! block appended per processed article:
//!
//! ```text
//! site: cnn
//! url: http://www.cnn.com/2016/10/19/politics/debate/index.html
//! total words: 812
//! unique words: 344
//! positive words: 21
//! negative words: 17
//! positive: win great support win
//! negative: attack lie
//!
//! ```

use crate::error::PipelineError;
use crate::models::ArticleSummary;
use itertools::Itertools;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

pub const SUMMARY_FILENAME: &str = "summary.txt";

/// Summary file location inside a topic directory.
pub fn summary_path(topic_dir: &Path) -> PathBuf {
    topic_dir.join(SUMMARY_FILENAME)
}

/// Render one article's block, including the trailing blank separator line.
pub fn render_summary(summary: &ArticleSummary) -> String {
    let sentiment = &summary.sentiment;
    let mut block = String::new();
    writeln!(block, "site: {}", summary.site).unwrap();
    writeln!(block, "url: {}", summary.url).unwrap();
    writeln!(block, "total words: {}", summary.total_words).unwrap();
    writeln!(block, "unique words: {}", summary.unique_words).unwrap();
    writeln!(block, "positive words: {}", sentiment.positive_count).unwrap();
    writeln!(block, "negative words: {}", sentiment.negative_count).unwrap();
    writeln!(block, "positive: {}", sentiment.positive_words.iter().join(" ")).unwrap();
    writeln!(block, "negative: {}", sentiment.negative_words.iter().join(" ")).unwrap();
    block.push('\n');
    block
}

/// Truncate the summary file if it already exists.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn reset_summary(path: &Path) -> Result<(), PipelineError> {
    let exists = fs::try_exists(path)
        .await
        .map_err(|e| PipelineError::io(path, e))?;
    if exists {
        fs::write(path, b"")
            .await
            .map_err(|e| PipelineError::io(path, e))?;
        info!("Cleared existing summary file");
    } else {
        debug!("No summary file to clear");
    }
    Ok(())
}

/// Append one article block to the summary file, creating it if needed.
#[instrument(level = "info", skip_all, fields(path = %path.display(), url = %summary.url))]
pub async fn append_summary(summary: &ArticleSummary, path: &Path) -> Result<(), PipelineError> {
    let block = render_summary(summary);
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| PipelineError::io(path, e))?;
    file.write_all(block.as_bytes())
        .await
        .map_err(|e| PipelineError::io(path, e))?;
    file.flush().await.map_err(|e| PipelineError::io(path, e))?;
    info!("Appended article summary");
    Ok(())
}
