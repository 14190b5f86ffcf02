use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{CommandOutput, NewsReport, QuotesReport};
use crate::error::CliError;

pub fn render(output: &CommandOutput, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    render_to(&mut writer, output, format, pretty)?;
    writer.flush()?;
    Ok(())
}

pub fn render_to<W: Write>(
    writer: &mut W,
    output: &CommandOutput,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match (format, output) {
        (OutputFormat::Json, CommandOutput::Quotes(report)) => write_json(writer, report, pretty),
        (OutputFormat::Json, CommandOutput::News(report)) => write_json(writer, report, pretty),
        (OutputFormat::Table, CommandOutput::Quotes(report)) => render_quotes_table(writer, report),
        (OutputFormat::Table, CommandOutput::News(report)) => render_news_table(writer, report),
    }
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(writer, "{payload}")?;
    Ok(())
}

fn render_quotes_table<W: Write>(writer: &mut W, report: &QuotesReport) -> Result<(), CliError> {
    if let Some(query) = &report.query {
        writeln!(writer, "search      : {query}")?;
    }
    writeln!(
        writer,
        "loaded      : {} of {}",
        report.requested - report.failed,
        report.requested
    )?;

    if let Some(message) = &report.message {
        writeln!(writer, "{message}")?;
        return Ok(());
    }

    writeln!(
        writer,
        "{:<8} {:>10} {:>9} {:>8} {:>10} {:>10} {:>10} {:>10}",
        "SYMBOL", "PRICE", "CHANGE", "CHG%", "OPEN", "HIGH", "LOW", "PREV"
    )?;
    for quote in &report.page.items {
        let change_percent = quote
            .change_percent()
            .map(|pct| format!("{pct:+.2}%"))
            .unwrap_or_else(|| String::from("-"));
        writeln!(
            writer,
            "{:<8} {:>10.2} {:>+9.2} {:>8} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            quote.symbol.as_str(),
            quote.current_price,
            quote.change(),
            change_percent,
            quote.open,
            quote.high,
            quote.low,
            quote.previous_close
        )?;
    }

    writeln!(
        writer,
        "Page {} of {}",
        report.page.page_index, report.page.total_pages
    )?;
    Ok(())
}

fn render_news_table<W: Write>(writer: &mut W, report: &NewsReport) -> Result<(), CliError> {
    writeln!(writer, "news        : {}", report.symbol)?;

    if let Some(message) = &report.message {
        writeln!(writer, "{message}")?;
        return Ok(());
    }

    for row in &report.page.items {
        writeln!(writer, "{:<17} {}", row.published, row.article.headline)?;
        if !row.article.url.is_empty() {
            writeln!(writer, "{:<17} {}", "", row.article.url)?;
        }
    }

    writeln!(
        writer,
        "Page {} of {}",
        report.page.page_index, report.page.total_pages
    )?;
    Ok(())
}
