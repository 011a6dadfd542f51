//! Dashboard orchestration.
//!
//! One refresh = one fetch from the record source, one normalization pass,
//! one period/criteria filter, then every aggregator over that snapshot.
//! The aggregation itself is pure and synchronous; only the fetch is async.
//!
//! A failed fetch degrades to an empty-but-valid payload so the dashboard
//! renders "no data" instead of going blank. Callers that refresh
//! concurrently must serialize which result wins; [`RefreshCoordinator`]
//! implements the last-request-wins rule for them.

use chrono::NaiveDate;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::DashboardData;
use crate::db::repository::RecordSource;
use crate::error::EngineError;
use crate::models::{MaintenanceRecord, Period, PeriodSelector, VerificationRecord};
use crate::parsing::{normalize_batch, normalize_verification_batch};
use crate::services::distributions::{
    area_distribution, critical_split, status_distribution, top_problem_categories,
    type_distribution, verification_outcomes, TOP_CATEGORIES,
};
use crate::services::intervals::compute_intervals;
use crate::services::ranking::{rank_equipment, TOP_EQUIPMENT};
use crate::services::summary::summary_metrics;
use crate::services::trends::monthly_trend;
use crate::transformations::{filter_records, RecordFilters};

/// Run every aggregator over one filtered snapshot.
///
/// The timeline is the exception to the period filter: it always covers the
/// trailing year relative to `reference`, restricted only by the extra
/// criteria, so the pulse view stays comparable across period selections.
pub fn compute_dashboard_data(
    records: &[MaintenanceRecord],
    verifications: &[VerificationRecord],
    period: &Period,
    filters: &RecordFilters,
    reference: NaiveDate,
) -> Result<DashboardData, EngineError> {
    let filtered = filter_records(records, period, filters);

    let unclipped = PeriodSelector::All.resolve(reference)?;
    let trend_input = filter_records(records, &unclipped, filters);

    Ok(DashboardData {
        summary: summary_metrics(&filtered),
        status: status_distribution(&filtered),
        by_type: type_distribution(&filtered),
        by_area: area_distribution(&filtered),
        top_categories: top_problem_categories(&filtered, TOP_CATEGORIES),
        timeline: monthly_trend(&trend_input, reference),
        critical_split: critical_split(&filtered),
        verification: verification_outcomes(verifications),
        intervals: compute_intervals(&filtered),
        ranking: rank_equipment(&filtered, TOP_EQUIPMENT),
        dropped_records: 0,
    })
}

/// Fetch both raw collections, surfacing `DataSourceFailure` on either.
///
/// The dashboard path degrades instead of failing; this strict variant backs
/// flows that must distinguish an empty record set from an unreachable
/// source.
pub async fn fetch_raw_collections<S: RecordSource + ?Sized>(
    source: &S,
) -> Result<(Vec<serde_json::Value>, Vec<serde_json::Value>), EngineError> {
    let maintenance = source.fetch_maintenance_records().await?;
    let verifications = source.fetch_verification_records().await?;
    Ok((maintenance, verifications))
}

/// Fetch, normalize and aggregate one dashboard refresh.
///
/// Period resolution failures surface before anything is fetched. Source
/// failures do not: the dashboard proceeds with an empty record set and a
/// warning, per the degradation policy.
pub async fn get_dashboard_data<S: RecordSource + ?Sized>(
    source: &S,
    selector: &PeriodSelector,
    filters: &RecordFilters,
    reference: NaiveDate,
) -> Result<DashboardData, EngineError> {
    let period = selector.resolve(reference)?;

    let raw_maintenance = match source.fetch_maintenance_records().await {
        Ok(values) => values,
        Err(e) => {
            log::warn!("maintenance fetch failed, rendering empty dashboard: {}", e);
            Vec::new()
        }
    };
    let raw_verifications = match source.fetch_verification_records().await {
        Ok(values) => values,
        Err(e) => {
            log::warn!("verification fetch failed, continuing without outcomes: {}", e);
            Vec::new()
        }
    };

    let maintenance = normalize_batch(&raw_maintenance);
    let verifications = normalize_verification_batch(&raw_verifications);

    let mut data = compute_dashboard_data(
        &maintenance.records,
        &verifications.records,
        &period,
        filters,
        reference,
    )?;
    data.dropped_records = maintenance.dropped + verifications.dropped;
    Ok(data)
}

/// Last-request-wins gate for concurrent dashboard refreshes.
///
/// Every refresh takes a token from [`begin`](Self::begin) before fetching
/// and offers its result to [`commit`](Self::commit) afterwards. A commit is
/// accepted only while its token is still the newest one issued, so a slow
/// early response can never clobber a faster later one.
#[derive(Default)]
pub struct RefreshCoordinator {
    generation: AtomicU64,
    latest: RwLock<Option<(u64, DashboardData)>>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh, superseding every in-flight one.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a refresh result. Returns `false` (and discards the data)
    /// when a newer refresh has been started since `token` was issued.
    pub fn commit(&self, token: u64, data: DashboardData) -> bool {
        if token != self.generation.load(Ordering::SeqCst) {
            return false;
        }
        *self.latest.write() = Some((token, data));
        true
    }

    /// The currently displayed aggregates, if any refresh has landed.
    pub fn snapshot(&self) -> Option<DashboardData> {
        self.latest.read().as_ref().map(|(_, data)| data.clone())
    }
}
