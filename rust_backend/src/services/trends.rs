//! Trailing twelve-month activity trend.
//!
//! The trend chart always shows the trailing year relative to "now",
//! independent of the dashboard's selected period. Records are grouped by
//! their own date into whichever of the twelve pre-seeded month buckets
//! they fall into; anything outside the window is silently dropped from
//! this aggregator only.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::api::TrendPoint;
use crate::models::MaintenanceRecord;

/// Width of the trend window in months.
pub const TREND_WINDOW_MONTHS: usize = 12;

/// Compute the monthly trend ending at the month of `reference`.
///
/// Always returns exactly [`TREND_WINDOW_MONTHS`] buckets in chronological
/// order, zero-seeded so quiet months still appear.
pub fn monthly_trend(records: &[MaintenanceRecord], reference: NaiveDate) -> Vec<TrendPoint> {
    // Month arithmetic on (year * 12 + month) integers keeps the window
    // construction infallible.
    let end_total = reference.year() * 12 + reference.month() as i32 - 1;

    let mut points: Vec<TrendPoint> = Vec::with_capacity(TREND_WINDOW_MONTHS);
    let mut index: HashMap<String, usize> = HashMap::new();

    for i in (0..TREND_WINDOW_MONTHS as i32).rev() {
        let total = end_total - i;
        let label = format!("{:04}-{:02}", total.div_euclid(12), total.rem_euclid(12) + 1);
        index.insert(label.clone(), points.len());
        points.push(TrendPoint { month: label, count: 0 });
    }

    for record in records {
        if let Some(date) = record.effective_date() {
            let label = format!("{:04}-{:02}", date.year(), date.month());
            if let Some(&i) = index.get(&label) {
                points[i].count += 1;
            }
        }
    }

    points
}
