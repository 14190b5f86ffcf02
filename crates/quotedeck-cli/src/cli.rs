//! CLI argument definitions for Quotedeck.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quotes` | Aggregate quotes, then search and page through them |
//! | `news` | Page through the last week of company news for one symbol |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | env or `10000` | Per-request timeout in ms |
//! | `--retries` | `0` | Extra attempts for transient failures |
//!
//! # Examples
//!
//! ```bash
//! # Board of the default universe, second page
//! quotedeck quotes --page 2
//!
//! # Only symbols starting with "A"
//! quotedeck quotes --search a
//!
//! # Recent news as JSON
//! quotedeck --format json --pretty news AAPL
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Quotedeck - stock quotes and company news in the terminal
#[derive(Debug, Parser)]
#[command(
    name = "quotedeck",
    author,
    version,
    about = "Stock quote board and company news viewer",
    long_about = "Quotedeck fetches quote snapshots for a set of tickers concurrently, \
keeps the ones that succeeded in the order they were requested, and shows them \
one page at a time. The API token is read from QUOTEDECK_FINNHUB_API_KEY \
(or FINNHUB_API_KEY); a .env file in the working directory is honoured.\n\
\n\
Use 'quotedeck <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Per-request timeout in milliseconds (overrides QUOTEDECK_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Extra attempts for transient failures (timeouts, 429, 5xx).
    #[arg(long, global = true, default_value_t = 0)]
    pub retries: u32,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch quotes concurrently, then filter and page through them.
    ///
    /// Symbols that fail to load are left out; the rest keep the order in
    /// which they were requested.
    ///
    /// # Examples
    ///
    ///   quotedeck quotes
    ///   quotedeck quotes AAPL MSFT NVDA
    ///   quotedeck quotes --search am --page-size 5
    Quotes(QuotesArgs),

    /// Show the last seven days of company news for one symbol.
    ///
    /// # Examples
    ///
    ///   quotedeck news AAPL
    ///   quotedeck news TSLA --page 2
    News(NewsArgs),
}

/// Arguments for the `quotes` command.
#[derive(Debug, Args)]
pub struct QuotesArgs {
    /// Symbols to load. Defaults to a built-in list of popular US tickers.
    pub symbols: Vec<String>,

    /// Case-insensitive prefix filter on symbol or company name.
    #[arg(long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Arguments for the `news` command.
#[derive(Debug, Args)]
pub struct NewsArgs {
    /// Symbol to load news for.
    pub symbol: String,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Page selection shared by both commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct PagingArgs {
    /// 1-based page to show.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,
}
