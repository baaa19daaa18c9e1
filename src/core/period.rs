//! Period resolution: named selectors → inclusive date intervals.

use crate::utils::date::{month_last_day, parse_date};
use chrono::{Datelike, Days, NaiveDate};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Named period selector.
///
/// Parsing never fails: unknown strings are kept as `Unknown` and resolve
/// to "today only".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodKey {
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    Custom,
    Unknown(String),
}

impl PeriodKey {
    pub fn as_str(&self) -> &str {
        match self {
            PeriodKey::ThisWeek => "this_week",
            PeriodKey::LastWeek => "last_week",
            PeriodKey::ThisMonth => "this_month",
            PeriodKey::LastMonth => "last_month",
            PeriodKey::Custom => "custom",
            PeriodKey::Unknown(s) => s.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PeriodKey::Unknown(_))
    }
}

impl FromStr for PeriodKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "this_week" => PeriodKey::ThisWeek,
            "last_week" => PeriodKey::LastWeek,
            "this_month" => PeriodKey::ThisMonth,
            "last_month" => PeriodKey::LastMonth,
            "custom" => PeriodKey::Custom,
            _ => PeriodKey::Unknown(s.to_string()),
        })
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive `[start, end]` interval of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    /// Number of days in the range, 0 when `start > end`.
    pub fn len_days(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// Resolve `period` relative to `today`.
///
/// `custom_start` / `custom_end` are only read for `PeriodKey::Custom`;
/// a missing or malformed bound yields `None` ("no valid range").
pub fn resolve(
    period: &PeriodKey,
    custom_start: Option<&str>,
    custom_end: Option<&str>,
    today: NaiveDate,
) -> Option<DateRange> {
    match period {
        PeriodKey::ThisWeek => Some(DateRange::new(week_monday(today)?, today)),
        PeriodKey::LastWeek => {
            let this_monday = week_monday(today)?;
            let start = this_monday.checked_sub_days(Days::new(7))?;
            let end = this_monday.pred_opt()?;
            Some(DateRange::new(start, end))
        }
        PeriodKey::ThisMonth => Some(DateRange::new(today.with_day(1)?, today)),
        PeriodKey::LastMonth => {
            let (y, m) = if today.month() == 1 {
                (today.year() - 1, 12)
            } else {
                (today.year(), today.month() - 1)
            };
            let start = NaiveDate::from_ymd_opt(y, m, 1)?;
            let end = NaiveDate::from_ymd_opt(y, m, month_last_day(y, m)?)?;
            Some(DateRange::new(start, end))
        }
        PeriodKey::Custom => {
            let start = parse_date(custom_start?)?;
            let end = parse_date(custom_end?)?;
            Some(DateRange::new(start, end))
        }
        // fallback: solo oggi
        PeriodKey::Unknown(_) => Some(DateRange::new(today, today)),
    }
}

/// Most recent Monday ≤ `d` (Sunday counts as day 7, not 0).
fn week_monday(d: NaiveDate) -> Option<NaiveDate> {
    let offset = d.weekday().number_from_monday() - 1;
    d.checked_sub_days(Days::new(u64::from(offset)))
}
