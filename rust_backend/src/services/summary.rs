//! Headline summary metrics for dashboard cards and report headers.

use std::collections::HashSet;

use crate::api::SummaryMetrics;
use crate::models::{CanonicalStatus, MaintenanceRecord};

/// Compute the summary counters over one filtered record set.
pub fn summary_metrics(records: &[MaintenanceRecord]) -> SummaryMetrics {
    let mut metrics = SummaryMetrics {
        total_records: records.len(),
        ..Default::default()
    };

    let mut equipment: HashSet<&str> = HashSet::new();
    for record in records {
        equipment.insert(record.equipment_id.as_str());
        if record.is_critical {
            metrics.critical_count += 1;
        }
        match CanonicalStatus::from_raw(&record.status) {
            CanonicalStatus::Pending => metrics.pending_count += 1,
            CanonicalStatus::Verified => metrics.verified_count += 1,
            CanonicalStatus::Completed => metrics.completed_count += 1,
            CanonicalStatus::Rejected => metrics.rejected_count += 1,
            CanonicalStatus::Other => {}
        }
    }
    metrics.distinct_equipment = equipment.len();

    metrics
}
