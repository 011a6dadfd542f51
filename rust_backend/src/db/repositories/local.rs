//! In-memory record source and report store.
//!
//! Both implementations keep everything behind an `Arc<RwLock<...>>`, making
//! them cheap to clone into async tasks and deterministic for tests. The
//! record source can be switched unhealthy to exercise degradation paths.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::{
    RecordSource, ReportRepository, RepositoryError, RepositoryResult,
};
use crate::models::ReportDescriptor;

/// In-memory stand-in for the remote record source.
#[derive(Clone)]
pub struct LocalRecordSource {
    data: Arc<RwLock<SourceData>>,
}

struct SourceData {
    maintenance: Vec<Value>,
    verifications: Vec<Value>,
    is_healthy: bool,
}

impl LocalRecordSource {
    /// Create an empty, healthy source.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(SourceData {
                maintenance: Vec::new(),
                verifications: Vec::new(),
                is_healthy: true,
            })),
        }
    }

    /// Seed one raw maintenance record.
    pub fn push_maintenance(&self, record: Value) {
        self.data.write().maintenance.push(record);
    }

    /// Seed one raw verification record.
    pub fn push_verification(&self, record: Value) {
        self.data.write().verifications.push(record);
    }

    /// Toggle the simulated connection health, for failure-path tests.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    pub fn maintenance_count(&self) -> usize {
        self.data.read().maintenance.len()
    }
}

impl Default for LocalRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSource for LocalRecordSource {
    async fn fetch_maintenance_records(&self) -> RepositoryResult<Vec<Value>> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "record source unavailable".to_string(),
            ));
        }
        Ok(data.maintenance.clone())
    }

    async fn fetch_verification_records(&self) -> RepositoryResult<Vec<Value>> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "record source unavailable".to_string(),
            ));
        }
        Ok(data.verifications.clone())
    }
}

/// In-memory saved-report store.
///
/// Descriptors are kept as serialized JSON internally, so every fetch is a
/// genuine deserialization round-trip of what was stored.
#[derive(Clone, Default)]
pub struct LocalReportStore {
    data: Arc<RwLock<StoreData>>,
}

#[derive(Default)]
struct StoreData {
    by_id: HashMap<String, String>,
    order: Vec<String>,
}

impl LocalReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_count(&self) -> usize {
        self.data.read().order.len()
    }
}

#[async_trait]
impl ReportRepository for LocalReportStore {
    async fn store_report(&self, descriptor: &ReportDescriptor) -> RepositoryResult<()> {
        let serialized = serde_json::to_string(descriptor)?;
        let mut data = self.data.write();

        if let Some(existing) = data.by_id.get(&descriptor.id) {
            // Ids are immutable; re-saving the identical snapshot is a no-op.
            if *existing == serialized {
                log::debug!("report {} already stored, skipping", descriptor.id);
                return Ok(());
            }
            return Err(RepositoryError::InternalError(format!(
                "report {} already exists with different content",
                descriptor.id
            )));
        }

        log::info!("storing report {} ('{}')", descriptor.id, descriptor.title);
        data.by_id.insert(descriptor.id.clone(), serialized);
        data.order.push(descriptor.id.clone());
        Ok(())
    }

    async fn fetch_report(&self, id: &str) -> RepositoryResult<ReportDescriptor> {
        let data = self.data.read();
        let serialized = data
            .by_id
            .get(id)
            .ok_or_else(|| RepositoryError::NotFound(format!("report {}", id)))?;
        Ok(serde_json::from_str(serialized)?)
    }

    async fn list_reports(&self) -> RepositoryResult<Vec<ReportDescriptor>> {
        let data = self.data.read();
        data.order
            .iter()
            .filter_map(|id| data.by_id.get(id))
            .map(|serialized| Ok(serde_json::from_str(serialized)?))
            .collect()
    }
}
