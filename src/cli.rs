// src/cli.rs
// =============================================================================
// This file defines the command-line interface of the `site-audit` binary
// using the `clap` crate's derive API.
//
// Subcommands:
// - crawl: the multi-page crawl used by the audit
// - page:  fetch and extract a single page
// - score: show how the prioritizer ranks a list of URLs
//
// Crawl options can come from a JSON file (--options); flags given on the
// command line override what the file says.
// =============================================================================

use clap::{Args, Parser, Subcommand};
use site_audit_crawler::error::OptionsError;
use site_audit_crawler::CrawlOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "site-audit",
    version,
    about = "Crawl a website's most informative pages and extract their content",
    long_about = "site-audit fetches a start page, ranks its internal links by how much they \
                  tell about the business (about, services, contact, pricing...), fetches the \
                  best few and prints a structured snapshot of every page."
)]
pub struct Cli {
    /// Log more detail to stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a site: the start page plus its highest-ranked internal pages
    ///
    /// Example: site-audit crawl example.se --max-pages 6
    Crawl {
        /// Start URL ("https://" is added when no scheme is given)
        url: String,

        #[command(flatten)]
        options: OptionArgs,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fetch and extract a single page
    ///
    /// Example: site-audit page example.se/om --json
    Page {
        /// Page URL ("https://" is added when no scheme is given)
        url: String,

        /// Timeout for the fetch in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Output the page in JSON format instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Print the priority score of each URL
    ///
    /// Example: site-audit score https://example.se/om https://example.se/blogg/a
    Score {
        /// URLs to score
        #[arg(required = true)]
        urls: Vec<String>,

        /// Priority pattern (repeatable; replaces the default list)
        #[arg(long = "pattern")]
        patterns: Vec<String>,
    },
}

/// Crawl options that can be given as flags
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Load crawl options from a JSON file
    #[arg(long = "options", value_name = "FILE")]
    pub options_file: Option<PathBuf>,

    /// Total number of pages to fetch, start page included
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Timeout per page fetch in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Priority pattern (repeatable, most important first; replaces the
    /// default list)
    #[arg(long = "pattern")]
    pub patterns: Vec<String>,

    /// Treat subdomains of the start host as internal links
    #[arg(long)]
    pub include_subdomains: bool,

    /// Maximum number of candidate pages fetched at the same time
    #[arg(long)]
    pub concurrency: Option<usize>,
}

impl OptionArgs {
    /// Builds the crawl options: defaults, then the options file, then flags
    pub fn resolve(&self) -> Result<CrawlOptions, OptionsError> {
        let mut options = match &self.options_file {
            Some(path) => CrawlOptions::from_file(path)?,
            None => CrawlOptions::default(),
        };

        if let Some(max_pages) = self.max_pages {
            options.max_pages = max_pages;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            options.timeout_ms = timeout_ms;
        }
        if !self.patterns.is_empty() {
            options.priority_patterns = self.patterns.clone();
        }
        if self.include_subdomains {
            options.include_subdomains = true;
        }
        if self.concurrency.is_some() {
            options.concurrency = self.concurrency;
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crawl_flags() {
        let cli = Cli::parse_from([
            "site-audit",
            "crawl",
            "example.se",
            "--max-pages",
            "6",
            "--pattern",
            "/om",
            "--pattern",
            "/kontakt",
            "--json",
        ]);

        let Commands::Crawl { url, options, json } = cli.command else {
            panic!("expected crawl subcommand");
        };
        assert_eq!(url, "example.se");
        assert!(json);

        let resolved = options.resolve().unwrap();
        assert_eq!(resolved.max_pages, 6);
        assert_eq!(resolved.priority_patterns, vec!["/om", "/kontakt"]);
        assert_eq!(resolved.timeout_ms, CrawlOptions::default().timeout_ms);
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let resolved = OptionArgs::default().resolve().unwrap();
        assert_eq!(resolved, CrawlOptions::default());
    }

    #[test]
    fn test_flags_override_file() {
        let path = std::env::temp_dir().join(format!("site-audit-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "maxPages": 8, "timeout": 3000 }"#).unwrap();

        let args = OptionArgs {
            options_file: Some(path.clone()),
            max_pages: Some(2),
            ..OptionArgs::default()
        };
        let resolved = args.resolve().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(resolved.max_pages, 2);
        assert_eq!(resolved.timeout_ms, 3000);
    }
}
