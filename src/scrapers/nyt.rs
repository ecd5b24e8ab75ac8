//! New York Times article layout.
//!
//! Story URLs end in `<slug>.html`, e.g.
//! `http://www.nytimes.com/2016/10/20/us/politics/presidential-debate.html`.
//! Body text lives in `p.story-body-text`. The Times sets curly double
//! quotes, which are stripped along with ASCII punctuation.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DOMAIN: &str = "nytimes.com";

pub const CONTENT_SELECTOR: &str = "p.story-body-text";

static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*/([^/]+)\.html").expect("valid NYT title pattern"));

/// Take the filename segment before `.html`.
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
            title("http://www.nytimes.com/2016/10/20/us/politics/presidential-debate.html"),
            Some("presidential-debate".to_string())
        );
    }

    #[test]
    fn test_title_ignores_query_after_html() {
        assert_eq!(
            title("https://www.nytimes.com/2016/10/20/us/debate.html?_r=0"),
            Some("debate".to_string())
        );
    }
}
