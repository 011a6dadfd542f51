//! Equipment ranking by maintenance event frequency.

use std::collections::HashMap;

use crate::api::RankingEntry;
use crate::models::MaintenanceRecord;

/// Number of entries the dashboard ranking table keeps.
pub const TOP_EQUIPMENT: usize = 10;

/// Rank equipment by event count, descending.
///
/// Ties break by most recent `last_event_date` (undated equipment last),
/// then by `equipment_id` ascending, so the ordering is fully deterministic.
/// `last_status` is the status of the chronologically latest dated event.
pub fn rank_equipment(records: &[MaintenanceRecord], top_n: usize) -> Vec<RankingEntry> {
    let mut groups: HashMap<&str, RankingEntry> = HashMap::new();

    for record in records {
        let date = record.effective_date();
        let entry = groups
            .entry(record.equipment_id.as_str())
            .or_insert_with(|| RankingEntry {
                equipment_id: record.equipment_id.clone(),
                equipment_type: record.equipment_type.clone(),
                event_count: 0,
                last_event_date: None,
                last_status: None,
            });

        entry.event_count += 1;
        if date.is_some() && date >= entry.last_event_date {
            entry.last_event_date = date;
            entry.last_status = Some(record.status.clone());
        }
    }

    let mut entries: Vec<RankingEntry> = groups.into_values().collect();
    entries.sort_by(|a, b| {
        b.event_count
            .cmp(&a.event_count)
            .then(b.last_event_date.cmp(&a.last_event_date))
            .then(a.equipment_id.cmp(&b.equipment_id))
    });
    entries.truncate(top_n);
    entries
}
