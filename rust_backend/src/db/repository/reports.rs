//! The saved-report store.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::ReportDescriptor;

/// Append-only, id-keyed store for assembled report descriptors.
///
/// Descriptors are immutable: the store never updates one in place, and a
/// stored descriptor must round-trip through serialization unchanged. A
/// single logical writer is assumed.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a descriptor under its generated id.
    async fn store_report(&self, descriptor: &ReportDescriptor) -> RepositoryResult<()>;

    /// Fetch one descriptor by id.
    ///
    /// # Errors
    /// `NotFound` when no descriptor has that id.
    async fn fetch_report(&self, id: &str) -> RepositoryResult<ReportDescriptor>;

    /// All stored descriptors in insertion order.
    async fn list_reports(&self) -> RepositoryResult<Vec<ReportDescriptor>>;
}
