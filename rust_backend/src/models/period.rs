//! Period selectors and their resolution into concrete date ranges.
//!
//! A dashboard or report carries a [`PeriodSelector`] (preset or custom
//! range); [`PeriodSelector::resolve`] turns it into a concrete inclusive
//! [`Period`] relative to a caller-supplied reference date. Keeping the
//! reference date explicit makes resolution a pure function and lets tests
//! pin "now".

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// Wide-open range used by the `all` preset. A sentinel rather than literal
/// infinity keeps date comparisons well-defined.
const ALL_START: (i32, u32, u32) = (1900, 1, 1);
const ALL_END: (i32, u32, u32) = (9999, 12, 31);

/// A resolved date range. Both boundaries are inclusive for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Whether `date` falls inside the period, boundaries included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Period selection as it arrives from the configuration surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PeriodSelector {
    CurrentMonth,
    LastMonth,
    Last3Months,
    Last6Months,
    CurrentYear,
    All,
    /// Custom range with unparsed `%Y-%m-%d` bounds, validated at resolution.
    Custom { start: String, end: String },
}

impl PeriodSelector {
    /// Resolve the selector into a concrete period relative to `reference`.
    ///
    /// # Errors
    ///
    /// `InvalidPeriod` when a custom bound fails to parse or `end < start`.
    pub fn resolve(&self, reference: NaiveDate) -> Result<Period, EngineError> {
        match self {
            PeriodSelector::CurrentMonth => {
                month_period(reference.year(), reference.month())
            }
            PeriodSelector::LastMonth => {
                let (y, m) = shift_month(reference.year(), reference.month(), -1);
                month_period(y, m)
            }
            PeriodSelector::Last3Months => trailing_period(reference, 3),
            PeriodSelector::Last6Months => trailing_period(reference, 6),
            PeriodSelector::CurrentYear => {
                let start = make_date(reference.year(), 1, 1)?;
                let end = make_date(reference.year(), 12, 31)?;
                Ok(Period { start, end })
            }
            PeriodSelector::All => {
                let start = make_date(ALL_START.0, ALL_START.1, ALL_START.2)?;
                let end = make_date(ALL_END.0, ALL_END.1, ALL_END.2)?;
                Ok(Period { start, end })
            }
            PeriodSelector::Custom { start, end } => {
                let start = parse_bound(start)?;
                let end = parse_bound(end)?;
                if end < start {
                    return Err(EngineError::InvalidPeriod(format!(
                        "end {} precedes start {}",
                        end, start
                    )));
                }
                Ok(Period { start, end })
            }
        }
    }
}

impl FromStr for PeriodSelector {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current-month" => Ok(PeriodSelector::CurrentMonth),
            "last-month" => Ok(PeriodSelector::LastMonth),
            "last-3-months" => Ok(PeriodSelector::Last3Months),
            "last-6-months" => Ok(PeriodSelector::Last6Months),
            "current-year" => Ok(PeriodSelector::CurrentYear),
            "all" => Ok(PeriodSelector::All),
            other => Err(EngineError::InvalidPeriod(format!(
                "unknown period selector: {}",
                other
            ))),
        }
    }
}

/// Shift a (year, month) pair by `delta` months.
fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + delta;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = shift_month(year, month, 1);
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

fn make_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, EngineError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        EngineError::InvalidPeriod(format!("invalid date {:04}-{:02}-{:02}", year, month, day))
    })
}

/// First through last day of one calendar month.
fn month_period(year: i32, month: u32) -> Result<Period, EngineError> {
    let start = make_date(year, month, 1)?;
    let end = make_date(year, month, days_in_month(year, month))?;
    Ok(Period { start, end })
}

/// `months` back from the reference date through the reference date itself,
/// clamping the start day when the source month is shorter.
fn trailing_period(reference: NaiveDate, months: i32) -> Result<Period, EngineError> {
    let (y, m) = shift_month(reference.year(), reference.month(), -months);
    let day = reference.day().min(days_in_month(y, m));
    let start = make_date(y, m, day)?;
    Ok(Period {
        start,
        end: reference,
    })
}

fn parse_bound(raw: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| EngineError::InvalidPeriod(format!("unparseable bound '{}': {}", raw, e)))
}
