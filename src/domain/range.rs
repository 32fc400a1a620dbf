//! Date ranges and the comparison periods charts are measured against.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::OverviewError;

/// Inclusive calendar window selected for the overview.
///
/// `from <= to` is not enforced: a range chosen by the user is carried as-is
/// and consumers decide how to treat an inverted window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Window ending at `end` that starts `days` calendar days earlier.
    /// `None` when the start falls outside the supported calendar.
    pub fn trailing(end: NaiveDate, days: u32) -> Option<Self> {
        let from = end.checked_sub_signed(Duration::days(i64::from(days)))?;
        Some(Self { from, to: end })
    }

    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    /// Returns `true` when `date` falls inside the window, bounds included.
    /// An inverted range contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Number of days between the bounds; negative for an inverted range.
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// Moves both bounds by `days` (negative moves backwards). `None` when
    /// either bound leaves the supported calendar.
    pub fn shift_days(&self, days: i64) -> Option<Self> {
        let delta = Duration::try_days(days)?;
        Some(Self {
            from: self.from.checked_add_signed(delta)?,
            to: self.to.checked_add_signed(delta)?,
        })
    }

    /// Moves both bounds by whole calendar years, clamping Feb 29 to Feb 28.
    pub fn shift_years(&self, years: i32) -> Option<Self> {
        Some(Self {
            from: shift_year(self.from, years)?,
            to: shift_year(self.to, years)?,
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// Selects which prior interval a chart compares the active range against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonPeriod {
    PreviousPeriod,
    #[default]
    LastYear,
    NoComparison,
}

impl ComparisonPeriod {
    pub const ALL: [ComparisonPeriod; 3] = [
        ComparisonPeriod::PreviousPeriod,
        ComparisonPeriod::LastYear,
        ComparisonPeriod::NoComparison,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonPeriod::PreviousPeriod => "previous-period",
            ComparisonPeriod::LastYear => "last-year",
            ComparisonPeriod::NoComparison => "no-comparison",
        }
    }

    /// Human label shown next to the comparison value.
    pub fn label(self) -> &'static str {
        match self {
            ComparisonPeriod::PreviousPeriod => "vs. previous period",
            ComparisonPeriod::LastYear => "vs. last year",
            ComparisonPeriod::NoComparison => "no comparison",
        }
    }
}

impl fmt::Display for ComparisonPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonPeriod {
    type Err = OverviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        ComparisonPeriod::ALL
            .into_iter()
            .find(|period| period.as_str() == needle)
            .ok_or_else(|| OverviewError::InvalidTag {
                kind: "comparison period",
                value: value.to_string(),
            })
    }
}

fn shift_year(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    let month = date.month();
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
