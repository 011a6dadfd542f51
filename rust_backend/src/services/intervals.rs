//! Maintenance recurrence interval analysis.
//!
//! Answers "how often does each equipment type need attention": consecutive
//! day gaps per equipment unit, averaged per unit, then averaged across all
//! units of the same type.

use std::collections::HashMap;

use crate::api::IntervalStat;
use crate::models::MaintenanceRecord;

/// Compute average recurrence intervals per equipment type.
///
/// Records are grouped by `equipment_id`; within each group dates are sorted
/// ascending and consecutive whole-day gaps computed. Non-positive gaps
/// (duplicate or same-day events) are not intervals and are discarded. Units
/// with fewer than two dated events contribute nothing.
///
/// The result is sorted descending by average interval, so the types that
/// break down least often surface first.
pub fn compute_intervals(records: &[MaintenanceRecord]) -> Vec<IntervalStat> {
    // Per-unit date lists, remembering the unit's equipment type.
    let mut units: HashMap<&str, (&str, Vec<chrono::NaiveDate>)> = HashMap::new();
    for record in records {
        if let Some(date) = record.date {
            let entry = units
                .entry(record.equipment_id.as_str())
                .or_insert_with(|| (record.equipment_type.as_str(), Vec::new()));
            entry.1.push(date);
        }
    }

    // Per-type accumulation of unit averages.
    let mut by_type: HashMap<&str, (f64, usize)> = HashMap::new();
    for (_unit, (equipment_type, mut dates)) in units {
        if dates.len() < 2 {
            continue;
        }
        dates.sort();

        let gaps: Vec<f64> = dates
            .windows(2)
            .map(|w| (w[1] - w[0]).num_days())
            .filter(|&days| days > 0)
            .map(|days| days as f64)
            .collect();
        if gaps.is_empty() {
            continue;
        }

        let unit_average = gaps.iter().sum::<f64>() / gaps.len() as f64;
        let entry = by_type.entry(equipment_type).or_insert((0.0, 0));
        entry.0 += unit_average;
        entry.1 += 1;
    }

    let mut stats: Vec<IntervalStat> = by_type
        .into_iter()
        .map(|(equipment_type, (sum, count))| IntervalStat {
            equipment_type: equipment_type.to_string(),
            average_interval_days: sum / count as f64,
        })
        .collect();

    stats.sort_by(|a, b| {
        b.average_interval_days
            .partial_cmp(&a.average_interval_days)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    stats
}
