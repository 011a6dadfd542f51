//! Saved report descriptors.
//!
//! A report is an immutable snapshot: the configuration that produced it plus
//! the aggregates it selected, frozen at creation. Edits create a new
//! descriptor; nothing is ever patched in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::api::{AggregateBucket, RankingEntry, SummaryMetrics, TrendPoint};
use crate::models::period::{Period, PeriodSelector};
use crate::transformations::RecordFilters;

/// Visualization keys a report can select.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Visualization {
    Summary,
    Status,
    Type,
    Area,
    Timeline,
    Table,
}

/// User-supplied report configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub title: String,
    pub period: PeriodSelector,
    #[serde(default)]
    pub filters: RecordFilters,
    pub visualizations: BTreeSet<Visualization>,
}

/// Aggregates bound to a report. Only the sections a selected visualization
/// needs are populated; the rest stay `None` and are skipped on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<AggregateBucket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_type: Option<Vec<AggregateBucket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_area: Option<Vec<AggregateBucket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TrendPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Vec<RankingEntry>>,
}

/// Immutable, named snapshot of aggregation results.
///
/// `content_checksum` covers the resolved period, filters and data payload;
/// two descriptors built from identical configuration over an unchanged
/// record set share a checksum even though id and timestamp differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDescriptor {
    pub id: String,
    pub title: String,
    pub period: Period,
    pub filters: RecordFilters,
    pub visualizations: BTreeSet<Visualization>,
    pub data: ReportData,
    pub content_checksum: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualization_serde_keys() {
        let keys: BTreeSet<Visualization> =
            serde_json::from_str(r#"["summary", "status", "type", "area", "timeline", "table"]"#)
                .unwrap();
        assert_eq!(keys.len(), 6);
        assert!(keys.contains(&Visualization::Type));
    }

    #[test]
    fn test_report_data_skips_empty_sections() {
        let data = ReportData {
            summary: Some(SummaryMetrics::default()),
            ..Default::default()
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("summary"));
        assert!(!json.contains("timeline"));
    }
}
