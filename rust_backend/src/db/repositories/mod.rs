//! In-memory repository implementations for tests and local development.

pub mod local;

pub use local::{LocalRecordSource, LocalReportStore};
