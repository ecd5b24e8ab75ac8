//! Body-text extraction from a fetched article.
//!
//! For each node matching the site's content selector the serialized HTML is
//! taken, tags are removed with one non-greedy `<.*?>` pass, and every
//! excluded punctuation character is dropped. Nested or malformed markup gets
//! no special treatment. Apostrophes and hyphens survive so that contractions
//! and hyphenated words stay whole.

use crate::scrapers::SiteConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use tracing::{debug, instrument, warn};

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid tag pattern"));

const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';

/// The serializer writes U+00A0 back out as this entity.
const NBSP_ENTITY: &str = "&nbsp;";

/// Whether `ch` is removed from paragraph text for the given site.
///
/// ASCII punctuation is always excluded except `'` and `-`; curly double
/// quotes only for sites that typeset them.
pub fn is_excluded(ch: char, strips_curly_quotes: bool) -> bool {
    if ch == '\'' || ch == '-' {
        return false;
    }
    if ch.is_ascii_punctuation() {
        return true;
    }
    strips_curly_quotes && (ch == LEFT_DOUBLE_QUOTE || ch == RIGHT_DOUBLE_QUOTE)
}

/// Remove markup tags from serialized HTML in a single pass.
pub fn strip_tags(markup: &str) -> String {
    TAG_PATTERN.replace_all(markup, "").into_owned()
}

/// Turn serialized non-breaking spaces back into U+00A0 so they still split words.
pub fn restore_nbsp(markup: &str) -> String {
    markup.replace(NBSP_ENTITY, "\u{00A0}")
}

/// Drop every excluded punctuation character.
pub fn strip_punctuation(text: &str, strips_curly_quotes: bool) -> String {
    text.chars()
        .filter(|&ch| !is_excluded(ch, strips_curly_quotes))
        .collect()
}

/// Extract cleaned paragraph blocks from `raw_document`, in document order.
///
/// A selector that matches nothing yields an empty vector; that is a normal
/// outcome (the article simply counts zero words).
#[instrument(level = "debug", skip_all, fields(site = site.label))]
pub fn extract(raw_document: &str, site: &SiteConfig) -> Vec<String> {
    let document = Html::parse_document(raw_document);

    let blocks: Vec<String> = document
        .select(site.selector())
        .map(|node| {
            let without_tags = strip_tags(&restore_nbsp(&node.html()));
            strip_punctuation(&without_tags, site.strips_curly_quotes)
        })
        .collect();

    if blocks.is_empty() {
        warn!(
            selector = site.content_selector,
            "Content selector matched no nodes"
        );
    } else {
        debug!(blocks = blocks.len(), "Extracted paragraph blocks");
    }
    blocks
}
