//! Output DTOs for dashboards and reports.
//!
//! ## Design Guidelines
//!
//! 1. **Primitives Only**: String labels, integer counts, f64 averages
//! 2. **Flat Structures**: no nesting beyond one composition level
//! 3. **Serializable**: everything round-trips through serde_json unchanged

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One `(label, count)` pair produced by a distribution aggregator.
///
/// For every distribution except the monthly trend, the counts across all
/// buckets of one aggregator sum to the number of records it consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateBucket {
    pub label: String,
    pub count: usize,
}

impl AggregateBucket {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One month of the trailing-twelve-months trend series.
///
/// `month` is a `YYYY-MM` label; months with no activity still appear with a
/// zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub count: usize,
}

/// Average recurrence interval for one equipment type.
///
/// Derived only from equipment units with at least two dated events; the
/// average is always strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalStat {
    pub equipment_type: String,
    pub average_interval_days: f64,
}

/// One row of the equipment ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub equipment_id: String,
    pub equipment_type: String,
    pub event_count: usize,
    pub last_event_date: Option<NaiveDate>,
    pub last_status: Option<String>,
}

/// Headline counters shown by the dashboard summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_records: usize,
    pub critical_count: usize,
    pub pending_count: usize,
    pub verified_count: usize,
    pub completed_count: usize,
    pub rejected_count: usize,
    pub distinct_equipment: usize,
}

/// Complete aggregate payload for one dashboard refresh.
///
/// All fields are derived from a single filtered snapshot of the record set,
/// except `timeline`, which always covers the trailing twelve months
/// regardless of the selected period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: SummaryMetrics,
    pub status: Vec<AggregateBucket>,
    pub by_type: Vec<AggregateBucket>,
    pub by_area: Vec<AggregateBucket>,
    pub top_categories: Vec<AggregateBucket>,
    pub timeline: Vec<TrendPoint>,
    pub critical_split: Vec<AggregateBucket>,
    pub verification: Vec<AggregateBucket>,
    pub intervals: Vec<IntervalStat>,
    pub ranking: Vec<RankingEntry>,
    /// Records excluded during normalization, retained for diagnostics.
    pub dropped_records: usize,
}
