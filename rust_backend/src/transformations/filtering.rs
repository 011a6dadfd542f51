//! Period and criteria filtering over normalized records.

use serde::{Deserialize, Serialize};

use crate::models::{MaintenanceRecord, Period};

/// Optional exact-match criteria applied on top of the period filter.
///
/// Empty criteria are a no-op on their dimension. Matching is case-sensitive
/// against canonical values; normalization has already standardized casing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilters {
    #[serde(default)]
    pub maintenance_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub equipment_type: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub critical_only: bool,
}

impl RecordFilters {
    fn matches(&self, record: &MaintenanceRecord) -> bool {
        if let Some(ref wanted) = self.maintenance_type {
            if record.maintenance_type != *wanted {
                return false;
            }
        }
        if let Some(ref wanted) = self.status {
            if record.status != *wanted {
                return false;
            }
        }
        if let Some(ref wanted) = self.equipment_type {
            if record.equipment_type != *wanted {
                return false;
            }
        }
        if let Some(ref wanted) = self.area {
            if record.area != *wanted {
                return false;
            }
        }
        if self.critical_only && !record.is_critical {
            return false;
        }
        true
    }
}

/// Select records whose effective date lies within `period` (boundaries
/// inclusive) and which match every non-empty criterion in `filters`.
///
/// Order-preserving; records without any usable date never pass.
pub fn filter_records(
    records: &[MaintenanceRecord],
    period: &Period,
    filters: &RecordFilters,
) -> Vec<MaintenanceRecord> {
    records
        .iter()
        .filter(|r| {
            r.effective_date()
                .map(|d| period.contains(d))
                .unwrap_or(false)
        })
        .filter(|r| filters.matches(r))
        .cloned()
        .collect()
}
