//! Site registry, article fetching, and body-text extraction.
//!
//! Every supported outlet is described by one immutable [`SiteConfig`] in
//! [`SITES`]. A manifest link is matched to a site by substring search for
//! the site's domain fragment, in table order; the first hit wins and a link
//! that matches nothing is skipped by the caller.
//!
//! # Supported Sources
//!
//! | Source | Module | Label | Content selector | Curly quotes stripped |
//! |--------|--------|-------|------------------|-----------------------|
//! | New York Times | [`nyt`] | `nytimes` | `p.story-body-text` | yes |
//! | CNN | [`cnn`] | `cnn` | `div.zn-body__paragraph` | no |
//! | Fox News | [`foxnews`] | `foxnews` | `div.article-body p` | yes |
//!
//! # Pipeline
//!
//! 1. **Resolve**: [`resolve`] maps a URL to its [`SiteConfig`]
//! 2. **Fetch**: [`fetch::FetchDocument`] retrieves the raw HTML
//! 3. **Extract**: [`extract::extract`] turns the HTML into cleaned paragraph blocks

pub mod cnn;
pub mod extract;
pub mod fetch;
pub mod foxnews;
pub mod nyt;

use once_cell::sync::Lazy;
use scraper::Selector;
use std::fmt;

/// Closed set of supported site layouts.
///
/// The discriminant indexes [`SITES`] and the compiled selector table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteId {
    NYTimes = 0,
    Cnn = 1,
    FoxNews = 2,
}

impl SiteId {
    /// The registry entry for this site.
    pub fn config(self) -> &'static SiteConfig {
        &SITES[self as usize]
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config().label)
    }
}

/// Extraction rules for one site layout.
pub struct SiteConfig {
    pub id: SiteId,
    /// Short name used in output file names and summary blocks.
    pub label: &'static str,
    /// Substring a URL must contain to belong to this site.
    pub domain: &'static str,
    /// CSS selector for paragraph-level body blocks.
    pub content_selector: &'static str,
    /// Whether `“` and `”` are stripped in addition to ASCII punctuation.
    pub strips_curly_quotes: bool,
    title_rule: fn(&str) -> Option<String>,
}

/// All supported sites, in resolution priority order.
pub static SITES: [SiteConfig; 3] = [
    SiteConfig {
        id: SiteId::NYTimes,
        label: "nytimes",
        domain: nyt::DOMAIN,
        content_selector: nyt::CONTENT_SELECTOR,
        strips_curly_quotes: true,
        title_rule: nyt::title,
    },
    SiteConfig {
        id: SiteId::Cnn,
        label: "cnn",
        domain: cnn::DOMAIN,
        content_selector: cnn::CONTENT_SELECTOR,
        strips_curly_quotes: false,
        title_rule: cnn::title,
    },
    SiteConfig {
        id: SiteId::FoxNews,
        label: "foxnews",
        domain: foxnews::DOMAIN,
        content_selector: foxnews::CONTENT_SELECTOR,
        strips_curly_quotes: true,
        title_rule: foxnews::title,
    },
];

impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("id", &self.id)
            .field("domain", &self.domain)
            .field("content_selector", &self.content_selector)
            .finish_non_exhaustive()
    }
}

static SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    SITES
        .iter()
        .map(|site| Selector::parse(site.content_selector).expect("valid site content selector"))
        .collect()
});

impl SiteConfig {
    /// The compiled content selector, parsed once per process.
    pub fn selector(&self) -> &'static Selector {
        &SELECTORS[self.id as usize]
    }

    /// Derive a short, file-name-safe article identifier from its URL.
    ///
    /// Uses the site's title rule; when the URL does not fit the rule the
    /// last non-empty path segment is used instead.
    pub fn title_for(&self, url: &str) -> String {
        let raw = (self.title_rule)(url).unwrap_or_else(|| {
            url.trim_end_matches('/')
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or(url)
                .to_string()
        });
        raw.replace(['/', ':', '?', '&', '='], "_")
    }
}

/// Find the site whose domain fragment occurs in `url`.
///
/// Returns `None` for anything that matches no configured site, including
/// blank or malformed lines; callers skip those silently.
pub fn resolve(url: &str) -> Option<&'static SiteConfig> {
    SITES.iter().find(|site| url.contains(site.domain))
}
