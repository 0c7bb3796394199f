//! Report dates as exchanged with the API (`DD-MM-YYYY`) and the tenure
//! filter of the dashboard.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use utoipa::ToSchema;

pub const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";

/// First year of the range requested before any filter is applied.
pub const DEFAULT_START_YEAR: i32 = 2021;
/// Last year of the range requested before any filter is applied.
pub const DEFAULT_END_YEAR: i32 = 2022;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("invalid date '{0}', expected DD-MM-YYYY")]
    InvalidDate(String),
    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: ReportDate, end: ReportDate },
}

/// A calendar date written as `DD-MM-YYYY` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema)]
#[schema(value_type = String, example = "01-01-2021")]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn parse(value: &str) -> Result<Self, PeriodError> {
        NaiveDate::parse_from_str(value.trim(), REPORT_DATE_FORMAT)
            .map(Self)
            .map_err(|_| PeriodError::InvalidDate(value.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(REPORT_DATE_FORMAT))
    }
}

impl FromStr for ReportDate {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ReportDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReportDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: ReportDate,
    end: ReportDate,
}

impl DateRange {
    pub fn new(start: ReportDate, end: ReportDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// `01-01-{year}` to `31-12-{year}`.
    pub fn year(year: i32) -> Option<Self> {
        Self::years(year, year)
    }

    /// `01-01-{first}` to `31-12-{last}`.
    pub fn years(first: i32, last: i32) -> Option<Self> {
        let start = ReportDate::from_ymd(first, 1, 1)?;
        let end = ReportDate::from_ymd(last, 12, 31)?;
        Self::new(start, end).ok()
    }

    /// Range requested on the first load of the dashboard.
    pub fn default_range() -> Self {
        let start = NaiveDate::from_ymd_opt(DEFAULT_START_YEAR, 1, 1).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(DEFAULT_END_YEAR, 12, 31).unwrap_or_default();
        Self {
            start: ReportDate(start),
            end: ReportDate(end),
        }
    }

    pub fn start(&self) -> ReportDate {
        self.start
    }

    pub fn end(&self) -> ReportDate {
        self.end
    }

    /// Whether the month lies within the month span of the range.
    pub fn contains_month(&self, year: i32, month: u32) -> bool {
        let key = (year, month);
        (self.start.year(), self.start.month()) <= key && key <= (self.end.year(), self.end.month())
    }
}

/// Period selected in the tenure filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tenure {
    #[default]
    All,
    Year(i32),
}

impl Tenure {
    pub const ALL_VALUE: &'static str = "all";

    /// Parses the value of a filter option; anything that is not a year is `All`.
    pub fn from_value(value: &str) -> Self {
        value
            .trim()
            .parse::<i32>()
            .map(Tenure::Year)
            .unwrap_or(Tenure::All)
    }

    pub fn value(&self) -> String {
        match self {
            Tenure::All => Self::ALL_VALUE.to_string(),
            Tenure::Year(year) => year.to_string(),
        }
    }

    /// Date range covered by the tenure. `All` spans the available years,
    /// or the default range when none are known.
    pub fn range(&self, years: &[i32]) -> DateRange {
        let range = match self {
            Tenure::Year(year) => DateRange::year(*year),
            Tenure::All => match (years.iter().min(), years.iter().max()) {
                (Some(first), Some(last)) => DateRange::years(*first, *last),
                _ => None,
            },
        };
        range.unwrap_or_else(DateRange::default_range)
    }
}

/// Option of the tenure select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOption {
    pub label: String,
    pub value: String,
}

/// One option per available year, in the given order.
pub fn year_options(years: &[i32]) -> Vec<YearOption> {
    years
        .iter()
        .map(|year| YearOption {
            label: year.to_string(),
            value: year.to_string(),
        })
        .collect()
}
