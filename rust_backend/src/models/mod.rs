//! Domain model: maintenance and verification records, periods, reports.

pub mod period;
pub mod record;
pub mod report;

pub use period::{Period, PeriodSelector};
pub use record::{CanonicalStatus, MaintenanceRecord, VerificationOutcome, VerificationRecord};
pub use report::{ReportConfig, ReportData, ReportDescriptor, Visualization};
