//! Repository trait definitions for the engine's two external stores.
//!
//! - [`error`]: error types shared by all implementations
//! - [`source`]: the remote collaborator that supplies raw records
//! - [`reports`]: the append-only saved-report store

pub mod error;
pub mod reports;
pub mod source;

pub use error::{RepositoryError, RepositoryResult};
pub use reports::ReportRepository;
pub use source::RecordSource;
