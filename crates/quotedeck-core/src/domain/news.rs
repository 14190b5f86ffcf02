use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

/// Number of calendar days covered by a company-news lookup.
pub const NEWS_LOOKBACK_DAYS: i64 = 7;

/// One company-news article as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u64,
    pub headline: String,
    pub summary: String,
    pub url: String,
    /// Publication time in epoch seconds. `None` means the provider sent no date.
    /// Non-positive values are treated the same way.
    pub published_at: Option<i64>,
}

impl NewsArticle {
    /// UTC calendar date of publication.
    pub fn display_date(&self) -> PublishedDate {
        match self.published_at {
            Some(epoch) if epoch > 0 => OffsetDateTime::from_unix_timestamp(epoch)
                .map(|ts| PublishedDate::On(ts.date()))
                .unwrap_or(PublishedDate::Unknown),
            _ => PublishedDate::Unknown,
        }
    }
}

/// Publication date rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedDate {
    On(Date),
    Unknown,
}

impl PublishedDate {
    pub const UNKNOWN_LABEL: &'static str = "No Date Available";

    pub fn date(self) -> Option<Date> {
        match self {
            Self::On(date) => Some(date),
            Self::Unknown => None,
        }
    }
}

impl Display for PublishedDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On(date) => f.write_str(&format_calendar_date(*date)),
            Self::Unknown => f.write_str(Self::UNKNOWN_LABEL),
        }
    }
}

/// Inclusive `from..=to` calendar window sent to the company-news endpoint.
///
/// Both ends are UTC dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsDateRange {
    pub from: Date,
    pub to: Date,
}

impl NewsDateRange {
    /// Window ending on `now`'s UTC date and starting seven days earlier.
    pub fn last_week(now: OffsetDateTime) -> Self {
        let now = now.to_offset(UtcOffset::UTC);
        let from = now - Duration::days(NEWS_LOOKBACK_DAYS);
        Self {
            from: from.date(),
            to: now.date(),
        }
    }

    pub fn from_param(&self) -> String {
        format_calendar_date(self.from)
    }

    pub fn to_param(&self) -> String {
        format_calendar_date(self.to)
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_calendar_date(date: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");
    date.format(format).unwrap_or_else(|_| {
        format!(
            "{}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    })
}
