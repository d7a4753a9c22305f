// src/main.rs
// =============================================================================
// This is the entry point of the `site-audit` CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr so JSON on stdout stays clean)
// 3. Dispatch to the subcommand handler
// 4. Print the results as a table or JSON
// 5. Exit with 0 on success, 2 on error
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, OptionArgs};
use site_audit_crawler::crawl::{self, CrawlOptions, MultiPageScrapeResult};
use site_audit_crawler::{HttpFetcher, PageContent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "site_audit_crawler=debug"
    } else {
        "site_audit_crawler=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Crawl { url, options, json } => handle_crawl(&url, &options, json).await,
        Commands::Page {
            url,
            timeout_ms,
            json,
        } => handle_page(&url, timeout_ms, json).await,
        Commands::Score { urls, patterns } => handle_score(&urls, patterns),
    }
}

async fn handle_crawl(url: &str, args: &OptionArgs, json: bool) -> Result<()> {
    let options = args.resolve()?;
    let result = crawl::crawl(url, &options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_crawl(&result);
    }
    Ok(())
}

async fn handle_page(url: &str, timeout_ms: Option<u64>, json: bool) -> Result<()> {
    let mut options = CrawlOptions::default();
    if let Some(timeout_ms) = timeout_ms {
        options.timeout_ms = timeout_ms;
    }

    let fetcher = HttpFetcher::new().context("could not build HTTP client")?;
    let page = crawl::scrape_page(&fetcher, url, &options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page_table(std::iter::once(&page));
        print_page_details(&page);
    }
    Ok(())
}

fn handle_score(urls: &[String], patterns: Vec<String>) -> Result<()> {
    let patterns = if patterns.is_empty() {
        CrawlOptions::default().priority_patterns
    } else {
        patterns
    };

    println!("{:<8} URL", "SCORE");
    println!("{}", "=".repeat(70));
    for raw in urls {
        let normalized = crawl::normalize_url(raw);
        let url = Url::parse(&normalized).with_context(|| format!("invalid URL '{}'", raw))?;
        println!("{:<8} {}", crawl::score_url(&url, &patterns), url);
    }
    Ok(())
}

fn print_crawl(result: &MultiPageScrapeResult) {
    println!(
        "📄 Analyzed {} page(s)\n",
        result.site_structure.total_pages_analyzed
    );
    print_page_table(result.pages());

    print_page_details(&result.main_page);

    if !result.site_structure.navigation_structure.is_empty() {
        println!("🧭 Navigation:");
        for label in &result.site_structure.navigation_structure {
            println!("   - {}", label);
        }
    }
}

// One row per page
fn print_page_table<'a>(pages: impl Iterator<Item = &'a PageContent>) {
    println!(
        "{:<50} {:>7} {:>9} {:>7} {:>8}",
        "URL", "WORDS", "HEADINGS", "IMAGES", "TIME"
    );
    println!("{}", "=".repeat(85));

    for page in pages {
        // Truncate URL if too long for display
        let url_display = if page.url.chars().count() > 47 {
            format!("{}...", page.url.chars().take(47).collect::<String>())
        } else {
            page.url.clone()
        };

        println!(
            "{:<50} {:>7} {:>9} {:>7} {:>6}ms",
            url_display,
            page.word_count,
            page.headings.len(),
            page.images,
            page.response_time
        );
    }
    println!();
}

fn print_page_details(page: &PageContent) {
    println!("📰 {}", page.title);
    if !page.description.is_empty() {
        println!("   {}", page.description);
    }
    println!(
        "   🔗 {} internal / {} external link(s)   🔒 SSL: {}",
        page.links.internal,
        page.links.external,
        if page.has_ssl { "yes" } else { "no" }
    );
    for heading in &page.headings {
        println!("   # {}", heading);
    }
    println!();
}
