//! Fox News article layout.
//!
//! Story URLs look like
//! `http://www.foxnews.com/politics/2016/10/19/final-debate-preview.html`;
//! paragraphs sit inside `div.article-body`. Curly double quotes are
//! stripped as well as ASCII punctuation.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DOMAIN: &str = "foxnews.com";

pub const CONTENT_SELECTOR: &str = "div.article-body p";

static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*/([^/]+)\.html").expect("valid Fox News title pattern"));

pub fn title(url: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_html_filename() {
        assert_eq!(
            title("http://www.foxnews.com/politics/2016/10/19/final-debate-preview.html"),
            Some("final-debate-preview".to_string())
        );
    }
}
