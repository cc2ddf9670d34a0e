//! CLI entry point for the leaderboard tool.
//!
//! Provides subcommands for ranking authors from one or more snapshot
//! sources, scraping a rendered submissions table into a snapshot, and
//! scoring a single `(stage, status)` pair.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use leaderboard::fetch::build_client;
use leaderboard::html::TableColumns;
use leaderboard::infra::{HtmlTableProvider, SourceKind, build_providers};
use leaderboard::output::{render_table, write_csv, write_json};
use leaderboard::scoring::analyzer::run;
use leaderboard::scoring::types::NO_STATUS;
use leaderboard::scoring::{Tier, score_tier};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Snapshots read when no source is given on the command line or in
/// `LEADERBOARD_SOURCES`.
const DEFAULT_SOURCES: [&str; 3] = [
    "data/leaderboard.json",
    "data/leaderboard1.json",
    "data/leaderboard2.json",
];

const LOAD_FAILURE: &str = "Failed to load leaderboard. Please try again later.";

#[derive(Parser)]
#[command(name = "leaderboard")]
#[command(about = "Rank submission authors by tiered review progress", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate one or more sources into a ranked leaderboard
    Rank {
        /// Files or URLs, concatenated in the given order
        #[arg(value_name = "FILE_OR_URL")]
        sources: Vec<String>,

        /// How to interpret the sources
        #[arg(short, long, value_enum, default_value_t = SourceKind::Snapshot)]
        kind: SourceKind,

        /// Fraction of table rows to read (html-table sources only)
        #[arg(short, long, default_value_t = 1.0)]
        fraction: f64,

        /// Maximum number of concurrent source fetches
        #[arg(short, long, default_value_t = 4)]
        concurrency: usize,

        /// Write the leaderboard as JSON to this path
        #[arg(long)]
        json: Option<String>,

        /// Write the leaderboard as CSV to this path
        #[arg(long)]
        csv: Option<String>,

        /// Do not print the table to stdout
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Extract entries from a rendered submissions table and save them as JSON
    Scrape {
        /// HTML file or URL
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Fraction of table rows to read, between 0 and 1
        #[arg(short, long, default_value_t = 1.0)]
        fraction: f64,

        /// JSON file to write
        #[arg(short, long, default_value = "leaderboard.json")]
        output: String,

        /// 0-based cell index of the author
        #[arg(long, default_value_t = 3)]
        author_col: usize,

        /// 0-based cell index of the stage
        #[arg(long, default_value_t = 7)]
        stage_col: usize,

        /// 0-based cell index of the status
        #[arg(long, default_value_t = 8)]
        status_col: usize,
    },
    /// Print the score of a single stage/status pair
    Score {
        stage: String,

        /// Omit to score as "No status"
        status: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/leaderboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("leaderboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let token = std::env::var("LEADERBOARD_TOKEN").ok();
    let client = build_client(token.as_deref())?;

    match cli.command {
        Commands::Rank {
            sources,
            kind,
            fraction,
            concurrency,
            json,
            csv,
            quiet,
        } => {
            let sources = resolve_sources(sources);
            info!(sources = ?sources, "Loading leaderboard sources");

            let providers = build_providers(&sources, kind, fraction, &client)?;
            let leaderboard = match run(providers, concurrency).await {
                Ok(leaderboard) => leaderboard,
                Err(e) if e.is_load_failure() => {
                    error!(error = %e, "{}", LOAD_FAILURE);
                    return Err(anyhow!(LOAD_FAILURE));
                }
                Err(e) => return Err(e.into()),
            };

            if !quiet {
                print!("{}", render_table(&leaderboard.rows));
            }
            if let Some(path) = json {
                write_json(&path, &leaderboard)?;
                info!(path = %path, "Leaderboard JSON written");
            }
            if let Some(path) = csv {
                write_csv(&path, &leaderboard)?;
                info!(path = %path, "Leaderboard CSV written");
            }
        }
        Commands::Scrape {
            source,
            fraction,
            output,
            author_col,
            stage_col,
            status_col,
        } => {
            let columns = TableColumns {
                author: author_col,
                stage: stage_col,
                status: status_col,
            };
            let provider = HtmlTableProvider::new(source, fraction, columns, client)?;
            let rows = provider.scrape().await?;

            write_json(&output, &rows)?;
            info!(rows = rows.len(), output = %output, "Scraped entries saved");
        }
        Commands::Score { stage, status } => {
            let status = status.filter(|s| !s.is_empty());
            let status = status.as_deref().unwrap_or(NO_STATUS);
            let score = score_tier(&stage, status);
            let tier = Tier::from_score(score).map_or("unranked", Tier::label);
            println!("{score} ({tier})");
        }
    }

    Ok(())
}

/// Command-line sources win, then `LEADERBOARD_SOURCES` (comma separated),
/// then the bundled snapshot paths.
fn resolve_sources(cli_sources: Vec<String>) -> Vec<String> {
    if !cli_sources.is_empty() {
        return cli_sources;
    }

    if let Ok(list) = std::env::var("LEADERBOARD_SOURCES") {
        let from_env: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if !from_env.is_empty() {
            return from_env;
        }
    }

    DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
}
