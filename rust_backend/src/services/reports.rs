//! Report assembly: one synchronous snapshot of the selected aggregates.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::db::checksum::report_checksum;
use crate::error::EngineError;
use crate::models::{
    MaintenanceRecord, PeriodSelector, ReportConfig, ReportData, ReportDescriptor, Visualization,
};
use crate::services::distributions::{
    area_distribution, status_distribution, type_distribution,
};
use crate::services::ranking::{rank_equipment, TOP_EQUIPMENT};
use crate::services::summary::summary_metrics;
use crate::services::trends::monthly_trend;
use crate::transformations::filter_records;

/// Assemble an immutable report descriptor from user configuration.
///
/// Resolves the period, filters the record set and computes only the
/// aggregates a selected visualization needs; unselected visualizations are
/// not computed. The timeline section ignores the report's period (it always
/// covers the trailing year relative to `reference`) but still honors the
/// extra filter criteria.
///
/// Re-invoking with the same configuration over an unchanged record set
/// yields a new id and timestamp but an identical `content_checksum`.
///
/// # Errors
///
/// `InvalidPeriod` when the configured period fails to resolve.
pub fn build_report(
    config: &ReportConfig,
    records: &[MaintenanceRecord],
    reference: NaiveDate,
) -> Result<ReportDescriptor, EngineError> {
    let period = config.period.resolve(reference)?;
    let filtered = filter_records(records, &period, &config.filters);

    let wants = |v: Visualization| config.visualizations.contains(&v);

    let timeline = if wants(Visualization::Timeline) {
        let unclipped = PeriodSelector::All.resolve(reference)?;
        let trend_input = filter_records(records, &unclipped, &config.filters);
        Some(monthly_trend(&trend_input, reference))
    } else {
        None
    };

    let data = ReportData {
        summary: wants(Visualization::Summary).then(|| summary_metrics(&filtered)),
        status: wants(Visualization::Status).then(|| status_distribution(&filtered)),
        by_type: wants(Visualization::Type).then(|| type_distribution(&filtered)),
        by_area: wants(Visualization::Area).then(|| area_distribution(&filtered)),
        timeline,
        table: wants(Visualization::Table).then(|| rank_equipment(&filtered, TOP_EQUIPMENT)),
    };

    let payload = serde_json::to_string(&(&period, &config.filters, &data))?;

    Ok(ReportDescriptor {
        id: Uuid::new_v4().to_string(),
        title: config.title.clone(),
        period,
        filters: config.filters.clone(),
        visualizations: config.visualizations.clone(),
        data,
        content_checksum: report_checksum(&payload),
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::UNSPECIFIED;
    use crate::transformations::RecordFilters;
    use std::collections::BTreeSet;

    fn record(id: &str, status: &str, y: i32, m: u32, d: u32) -> MaintenanceRecord {
        MaintenanceRecord {
            id: id.to_string(),
            equipment_id: format!("EQ-{}", id),
            equipment_type: "Pump".to_string(),
            technician: UNSPECIFIED.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d),
            registration_date: None,
            area: "Plant A".to_string(),
            location: UNSPECIFIED.to_string(),
            maintenance_type: "Preventiva".to_string(),
            is_critical: false,
            problem_category: UNSPECIFIED.to_string(),
            problem_description: UNSPECIFIED.to_string(),
            additional_notes: None,
            status: status.to_string(),
        }
    }

    fn config(visualizations: &[Visualization]) -> ReportConfig {
        ReportConfig {
            title: "Monthly maintenance".to_string(),
            period: PeriodSelector::CurrentMonth,
            filters: RecordFilters::default(),
            visualizations: visualizations.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    #[test]
    fn test_only_selected_sections_computed() {
        let records = vec![record("1", "Pendente", 2025, 3, 10)];
        let report = build_report(
            &config(&[Visualization::Summary, Visualization::Status]),
            &records,
            reference(),
        )
        .unwrap();

        assert!(report.data.summary.is_some());
        assert!(report.data.status.is_some());
        assert!(report.data.by_type.is_none());
        assert!(report.data.by_area.is_none());
        assert!(report.data.timeline.is_none());
        assert!(report.data.table.is_none());
    }

    #[test]
    fn test_period_is_resolved_and_applied() {
        let records = vec![
            record("1", "Pendente", 2025, 3, 10),
            record("2", "Pendente", 2025, 1, 10), // outside current month
        ];
        let report =
            build_report(&config(&[Visualization::Summary]), &records, reference()).unwrap();

        assert_eq!(report.period.start, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(report.data.summary.as_ref().unwrap().total_records, 1);
    }

    #[test]
    fn test_timeline_ignores_report_period() {
        // A record five months before the report's current-month period
        // still appears in the timeline's trailing year.
        let records = vec![
            record("1", "Pendente", 2025, 3, 10),
            record("2", "Pendente", 2024, 10, 5),
        ];
        let report =
            build_report(&config(&[Visualization::Timeline]), &records, reference()).unwrap();

        let timeline = report.data.timeline.unwrap();
        assert_eq!(timeline.len(), 12);
        let total: usize = timeline.iter().map(|p| p.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_invalid_period_surfaces() {
        let mut cfg = config(&[Visualization::Summary]);
        cfg.period = PeriodSelector::Custom {
            start: "2025-06-01".to_string(),
            end: "2025-01-01".to_string(),
        };
        assert!(matches!(
            build_report(&cfg, &[], reference()),
            Err(EngineError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_rebuild_is_structurally_idempotent() {
        let records = vec![
            record("1", "Pendente", 2025, 3, 10),
            record("2", "Concluído", 2025, 3, 12),
        ];
        let cfg = config(&[
            Visualization::Summary,
            Visualization::Status,
            Visualization::Table,
        ]);

        let first = build_report(&cfg, &records, reference()).unwrap();
        let second = build_report(&cfg, &records, reference()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.content_checksum, second.content_checksum);
        assert_eq!(first.data, second.data);
    }

    #[test]
    fn test_changed_records_change_checksum() {
        let cfg = config(&[Visualization::Summary]);
        let first = build_report(&cfg, &[record("1", "Pendente", 2025, 3, 10)], reference()).unwrap();
        let second = build_report(
            &cfg,
            &[
                record("1", "Pendente", 2025, 3, 10),
                record("2", "Pendente", 2025, 3, 11),
            ],
            reference(),
        )
        .unwrap();

        assert_ne!(first.content_checksum, second.content_checksum);
    }
}
