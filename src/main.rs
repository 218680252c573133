//! Page-Glean main entry point
//!
//! This is the command-line interface for the Page-Glean scraper.

use anyhow::Context;
use clap::Parser;
use page_glean::config::{load_config, Config};
use page_glean::output::{render, write_output, OutputFormat};
use page_glean::{ScrapeError, ScrapeOptions, Scraper};
use std::future::Future;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tracing_subscriber::EnvFilter;

/// Page-Glean: structured summary of a single web page
///
/// Fetches a page and extracts its title, headings, paragraphs, links,
/// images and meta description. Without a URL it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "page-glean")]
#[command(version)]
#[command(about = "Structured summary of a single web page", long_about = None)]
struct Cli {
    /// Page URL to scrape (omit for interactive mode)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the rendered result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum headings per level (h1, h2, h3)
    #[arg(long)]
    headings_limit: Option<usize>,

    /// Maximum paragraphs
    #[arg(long)]
    paragraphs_limit: Option<usize>,

    /// Maximum links
    #[arg(long)]
    links_limit: Option<usize>,

    /// Maximum images
    #[arg(long)]
    images_limit: Option<usize>,

    /// Per-attempt request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Number of attempts for timeouts and connection failures
    #[arg(long)]
    max_retries: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        let limits = &mut config.limits;
        if let Some(n) = self.headings_limit {
            limits.headings_limit = n;
        }
        if let Some(n) = self.paragraphs_limit {
            limits.paragraphs_limit = n;
        }
        if let Some(n) = self.links_limit {
            limits.links_limit = n;
        }
        if let Some(n) = self.images_limit {
            limits.images_limit = n;
        }
        if let Some(ms) = self.timeout_ms {
            config.fetcher.timeout_ms = ms;
        }
        if let Some(n) = self.max_retries {
            config.fetcher.max_retries = n;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };
    cli.apply_overrides(&mut config);
    page_glean::config::validate(&config).context("Invalid configuration")?;

    let scraper = Scraper::new(config.fetcher.clone())?;

    match &cli.url {
        Some(url) => handle_single(&scraper, url, &config.limits, &cli).await,
        None => handle_interactive(&scraper, &config.limits, cli.format).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_glean=warn,warn"),
            1 => EnvFilter::new("page_glean=info,warn"),
            2 => EnvFilter::new("page_glean=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Scrapes one URL given on the command line
async fn handle_single(
    scraper: &Scraper,
    url: &str,
    options: &ScrapeOptions,
    cli: &Cli,
) -> anyhow::Result<()> {
    let result = scraper.scrape(url, Some(options)).await?;

    match &cli.output {
        Some(path) => {
            write_output(&result, cli.format, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !cli.quiet {
                println!("Result written to: {}", path.display());
            }
        }
        None => println!("{}", render(&result, cli.format)?),
    }

    Ok(())
}

/// What the interactive prompt produced
#[derive(Debug, PartialEq, Eq)]
enum Prompt {
    Line(String),
    EndOfInput,
    Cancelled,
}

/// Reads one prompt line, or stops early if `cancel` completes first
async fn read_prompt<R, C>(lines: &mut Lines<R>, cancel: C) -> std::io::Result<Prompt>
where
    R: AsyncBufRead + Unpin,
    C: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        biased;
        _ = cancel => Ok(Prompt::Cancelled),
        line = lines.next_line() => Ok(match line? {
            Some(line) => Prompt::Line(line),
            None => Prompt::EndOfInput,
        }),
    }
}

/// Runs the interactive prompt loop until the user quits, input ends or Ctrl-C
async fn handle_interactive(
    scraper: &Scraper,
    options: &ScrapeOptions,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("=== Page-Glean ===");
    println!("Enter 'quit' to exit\n");

    loop {
        stdout
            .write_all(b"Enter a webpage URL to scrape: ")
            .await?;
        stdout.flush().await?;

        let line = match read_prompt(&mut lines, tokio::signal::ctrl_c()).await? {
            Prompt::Line(line) => line,
            Prompt::EndOfInput => {
                println!();
                break;
            }
            Prompt::Cancelled => {
                println!("\n\nOperation cancelled. Goodbye!");
                break;
            }
        };
        let input = line.trim();

        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("Goodbye!");
            break;
        }

        if input.is_empty() {
            println!("Please enter a valid URL.\n");
            continue;
        }

        println!("Scraping website... This may take a few seconds.");

        let outcome = tokio::select! {
            outcome = scraper.scrape(input, Some(options)) => outcome,
            _ = tokio::signal::ctrl_c() => {
                println!("\n\nOperation cancelled. Goodbye!");
                break;
            }
        };

        match outcome {
            Ok(result) => println!("{}", render(&result, format)?),
            Err(e) => println!("{}: {}\n", error_category(&e), e),
        }

        println!("\n{}", "-".repeat(60));
    }

    Ok(())
}

/// Short label used when reporting a failed scrape interactively
fn error_category(error: &ScrapeError) -> &'static str {
    match error {
        e if e.is_transient() => "Network Error",
        ScrapeError::InvalidInput(_) => "Validation Error",
        ScrapeError::HttpStatus { .. } => "HTTP Error",
        ScrapeError::UnsupportedContent { .. } => "Content Error",
        ScrapeError::Config(_) => "Configuration Error",
        _ => "Unexpected Error",
    }
}
