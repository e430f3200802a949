//! Report period resolution and calendar ranges.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use super::error::AnalyticsError;

/// Latest year a report can be requested for.
pub const MAX_YEAR: i32 = 9999;

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReportPeriod {
    /// Month (1-12).
    pub month: u32,
    /// Year.
    pub year: i32,
}

impl ReportPeriod {
    /// Creates a period, rejecting months outside 1-12 and years outside
    /// 1-9999.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidArgument` for an out-of-range value.
    pub fn new(month: u32, year: i32) -> Result<Self, AnalyticsError> {
        if !(1..=12).contains(&month) {
            return Err(AnalyticsError::invalid_argument(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        if !(1..=MAX_YEAR).contains(&year) {
            return Err(AnalyticsError::invalid_argument(format!(
                "year must be between 1 and {MAX_YEAR}, got {year}"
            )));
        }
        Ok(Self { month, year })
    }

    /// Resolves raw query values against `today`.
    ///
    /// A value that is absent or not an integer falls back to today's month
    /// or year. A value that parses but is out of range is an error.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidArgument` for an out-of-range value.
    pub fn resolve(
        month: Option<&str>,
        year: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, AnalyticsError> {
        let month = match month.and_then(|m| m.trim().parse::<i64>().ok()) {
            Some(m) => u32::try_from(m).map_err(|_| {
                AnalyticsError::invalid_argument(format!(
                    "month must be between 1 and 12, got {m}"
                ))
            })?,
            None => today.month(),
        };
        let year = match year.and_then(|y| y.trim().parse::<i64>().ok()) {
            Some(y) => i32::try_from(y).map_err(|_| {
                AnalyticsError::invalid_argument(format!(
                    "year must be between 1 and {MAX_YEAR}, got {y}"
                ))
            })?,
            None => today.year(),
        };

        Self::new(month, year)
    }

    /// First day of the period.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the period: the day before the first of the next month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_first
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Inclusive date range covering the period.
    #[must_use]
    pub fn date_range(self) -> DateRange {
        DateRange {
            first_day: self.first_day(),
            last_day: self.last_day(),
        }
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day, inclusive.
    pub first_day: NaiveDate,
    /// Last day, inclusive.
    pub last_day: NaiveDate,
}

impl DateRange {
    /// Start of the first day (00:00:00).
    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.first_day.and_time(NaiveTime::MIN)
    }

    /// End of the last day (23:59:59).
    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.last_day
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| self.last_day.and_time(NaiveTime::MIN))
    }

    /// Whether `date` falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first_day..=self.last_day).contains(&date)
    }
}
