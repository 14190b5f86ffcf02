mod news;
mod quotes;

use std::num::NonZeroUsize;

use quotedeck_core::{FinnhubAdapter, ProviderConfig, RetryConfig, RetryingSource, ValidationError};

use crate::cli::{Cli, Command, PagingArgs};
use crate::error::CliError;

pub use news::{NewsReport, NewsRow};
pub use quotes::QuotesReport;

/// Result of one CLI command, ready for rendering.
#[derive(Debug)]
pub enum CommandOutput {
    Quotes(QuotesReport),
    News(NewsReport),
}

impl CommandOutput {
    /// True when symbols were requested but none could be loaded.
    pub fn all_failed(&self) -> bool {
        match self {
            Self::Quotes(report) => report.requested > 0 && report.failed == report.requested,
            Self::News(_) => false,
        }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let mut config = ProviderConfig::from_env()?;
    if let Some(timeout_ms) = cli.timeout_ms {
        if timeout_ms == 0 {
            return Err(CliError::Command(String::from(
                "--timeout-ms must be greater than zero",
            )));
        }
        config = config.with_timeout_ms(timeout_ms);
    }

    let source = RetryingSource::new(FinnhubAdapter::new(config), RetryConfig::exponential(cli.retries));

    match &cli.command {
        Command::Quotes(args) => Ok(CommandOutput::Quotes(quotes::run(args, &source).await?)),
        Command::News(args) => Ok(CommandOutput::News(news::run(args, &source).await?)),
    }
}

/// Validated page size and 1-based page index.
fn page_selection(paging: PagingArgs) -> Result<(NonZeroUsize, usize), ValidationError> {
    let page_size = NonZeroUsize::new(paging.page_size).ok_or(ValidationError::ZeroPageSize)?;
    if paging.page == 0 {
        return Err(ValidationError::ZeroPageIndex);
    }
    Ok((page_size, paging.page))
}
