//! The raw record source.

use async_trait::async_trait;
use serde_json::Value;

use super::error::RepositoryResult;

/// Remote collaborator that supplies the raw record collections.
///
/// Both calls are single-shot: the engine does not retry them, and a failure
/// is reported as-is so the caller can degrade gracefully. Records arrive
/// loosely typed; `parsing::normalizer` owns mapping them onto the canonical
/// schema.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_maintenance_records(&self) -> RepositoryResult<Vec<Value>>;

    async fn fetch_verification_records(&self) -> RepositoryResult<Vec<Value>>;
}
