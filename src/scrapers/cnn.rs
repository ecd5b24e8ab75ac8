//! CNN article layout.
//!
//! Story URLs end in a slug directory followed by `index.html`, e.g.
//! `http://www.cnn.com/2016/10/19/politics/debate-takeaways/index.html`.
//! Body text lives in `div.zn-body__paragraph` blocks. CNN serves straight
//! quotes, so only ASCII punctuation is stripped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Domain fragment a manifest link must contain to be treated as CNN.
pub const DOMAIN: &str = "cnn.com";

/// CSS selector for paragraph-level body blocks.
pub const CONTENT_SELECTOR: &str = "div.zn-body__paragraph";

static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*/([^/]+)/index\.html").expect("valid CNN title pattern"));

/// Take the path segment immediately before `/index.html`.
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
    fn test_title_from_index_url() {
        assert_eq!(
            title("http://www.cnn.com/2016/10/19/politics/debate-takeaways/index.html"),
            Some("debate-takeaways".to_string())
        );
    }

    #[test]
    fn test_title_requires_index_html() {
        assert_eq!(title("http://www.cnn.com/2016/10/19/politics/debate"), None);
    }
}
