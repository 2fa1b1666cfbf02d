use std::fmt::{self, Display};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AppError;

/// A closed calendar-date range scoping a processing run temporally.
///
/// Guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "PeriodRepr", into = "PeriodRepr")]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Parse and validate a period from two `YYYY-MM-DD` strings.
    pub fn new(start: &str, end: &str) -> Result<Self, AppError> {
        Self::from_dates(parse_date(start)?, parse_date(end)?)
    }

    /// Validate and create a period from already-parsed dates.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::PeriodOrder { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start date in the `yyyy-DDD` ordinal form the post-processing tool consumes.
    pub fn start_ordinal(&self) -> String {
        self.start.format("%Y-%j").to_string()
    }

    /// End date in the `yyyy-DDD` ordinal form the post-processing tool consumes.
    pub fn end_ordinal(&self) -> String {
        self.end.format("%Y-%j").to_string()
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(value.to_string()))
}

/// Wire form of a period in run spec files.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct PeriodRepr {
    start: String,
    end: String,
}

impl TryFrom<PeriodRepr> for Period {
    type Error = AppError;

    fn try_from(repr: PeriodRepr) -> Result<Self, Self::Error> {
        Period::new(&repr.start, &repr.end)
    }
}

impl From<Period> for PeriodRepr {
    fn from(period: Period) -> Self {
        PeriodRepr { start: period.start.to_string(), end: period.end.to_string() }
    }
}
