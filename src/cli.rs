//! Command-line interface definitions for News Lexicon.
//!
//! Every path may come from a flag, an environment variable, or the optional
//! YAML config file; flags win over the file.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the News Lexicon application.
///
/// # Examples
///
/// ```sh
/// # Everything on the command line
/// news_lexicon -m links.txt -p positive-words.txt -n negative-words.txt -o ./out
///
/// # Paths from a config file, keep going past dead links
/// news_lexicon -c news_lexicon.yaml --skip-failed-fetches
/// ```
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Manifest of topic headers and article URLs
    #[arg(short, long, env = "NEWS_LEXICON_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Root directory under which topic directories are created
    #[arg(short, long, env = "NEWS_LEXICON_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Sorted positive word list, one word per line
    #[arg(short, long, env = "NEWS_LEXICON_POSITIVE")]
    pub positive_lexicon: Option<PathBuf>,

    /// Sorted negative word list, one word per line
    #[arg(short, long, env = "NEWS_LEXICON_NEGATIVE")]
    pub negative_lexicon: Option<PathBuf>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log and skip articles whose fetch fails instead of aborting the run
    #[arg(long)]
    pub skip_failed_fetches: bool,

    /// Load lexicons without checking that they are sorted
    #[arg(long)]
    pub no_verify_lexicons: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "news_lexicon",
            "--manifest",
            "links.txt",
            "--output-dir",
            "./out",
            "--positive-lexicon",
            "pos.txt",
            "--negative-lexicon",
            "neg.txt",
        ]);

        assert_eq!(cli.manifest, Some(PathBuf::from("links.txt")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("./out")));
        assert_eq!(cli.positive_lexicon, Some(PathBuf::from("pos.txt")));
        assert_eq!(cli.negative_lexicon, Some(PathBuf::from("neg.txt")));
        assert!(!cli.skip_failed_fetches);
        assert!(!cli.no_verify_lexicons);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "news_lexicon",
            "-m",
            "/tmp/links.txt",
            "-p",
            "/tmp/pos.txt",
            "-n",
            "/tmp/neg.txt",
            "-c",
            "/tmp/config.yaml",
            "--skip-failed-fetches",
        ]);

        assert_eq!(cli.manifest, Some(PathBuf::from("/tmp/links.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.yaml")));
        assert!(cli.skip_failed_fetches);
    }
}
