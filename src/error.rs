//! Error types for the scrape-and-analyze pipeline.
//!
//! Only conditions that stop an article (or the whole run) are modelled here.
//! A link that matches no configured site and a selector that matches no
//! nodes are ordinary outcomes, carried as `None` and an empty block list.
//!
//! | Error | Fatal? | Raised by |
//! |-------|--------|-----------|
//! | [`FetchError`] | per policy | [`crate::scrapers::fetch`] |
//! | [`LexiconError`] | yes, at startup | [`crate::analysis::lexicon`] |
//! | [`ConfigError`] | yes, at startup | [`crate::config`] |
//! | [`PipelineError::ManifestState`] | yes | [`crate::orchestrator`] |

use std::path::PathBuf;
use thiserror::Error;

/// Retrieving an article's raw document failed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read as text.
    #[error("reading body of {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL whose retrieval failed.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. } => url,
        }
    }
}

/// Loading a lexicon word list failed.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("cannot read lexicon {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Binary search needs ascending order; the list was rejected at load.
    #[error(
        "lexicon {} is not sorted: line {line} ({word:?}) sorts before {previous:?}",
        .path.display()
    )]
    Unsorted {
        path: PathBuf,
        line: usize,
        previous: String,
        word: String,
    },
}

/// Building the run settings failed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required setting was given neither on the command line nor in the file.
    #[error("missing required setting `{0}` (pass it as a flag or set it in the config file)")]
    Missing(&'static str),
}

/// Errors that abort a manifest run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A link appeared before any topic header established an output directory.
    #[error("manifest line {line_no} is a link but no topic header precedes it: {line}")]
    ManifestState { line_no: usize, line: String },

    /// A topic header that is not a single plain directory name.
    #[error("manifest line {line_no}: topic {name:?} must be a single directory name inside the output directory")]
    InvalidTopic { line_no: usize, name: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode frequency table for {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_state_message_names_line() {
        let err = PipelineError::ManifestState {
            line_no: 1,
            line: "http://cnn.com/a/index.html".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 1"));
        assert!(msg.contains("http://cnn.com/a/index.html"));
    }

    #[test]
    fn test_invalid_topic_message_names_line() {
        let err = PipelineError::InvalidTopic {
            line_no: 4,
            name: "../escape".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("../escape"));
    }

    #[test]
    fn test_fetch_status_url() {
        let err = FetchError::Status {
            url: "http://cnn.com/x".to_string(),
            status: 404,
        };
        assert_eq!(err.url(), "http://cnn.com/x");
        assert_eq!(err.to_string(), "request for http://cnn.com/x returned HTTP 404");
    }

    #[test]
    fn test_unsorted_lexicon_message() {
        let err = LexiconError::Unsorted {
            path: PathBuf::from("positive.txt"),
            line: 3,
            previous: "zeal".to_string(),
            word: "able".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("positive.txt"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_missing_setting_message() {
        assert!(ConfigError::Missing("manifest").to_string().contains("`manifest`"));
    }
}
