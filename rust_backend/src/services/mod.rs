//! Service layer: stateless aggregators and orchestration.
//!
//! Every aggregator is a pure function over in-memory collections; the only
//! asynchronous services are the dashboard fetch and the export pipeline.

pub mod dashboard;
pub mod distributions;
pub mod export;
pub mod intervals;
pub mod ranking;
pub mod reports;
pub mod summary;
pub mod trends;

pub use dashboard::{
    compute_dashboard_data, fetch_raw_collections, get_dashboard_data, RefreshCoordinator,
};
pub use distributions::{
    area_distribution, critical_split, status_distribution, top_problem_categories,
    type_distribution, verification_outcomes,
};
pub use export::{export_report, ExportArtifact, ExportFormat, ReportExporter, SimulatedExporter};
pub use intervals::compute_intervals;
pub use ranking::rank_equipment;
pub use reports::build_report;
pub use summary::summary_metrics;
pub use trends::{monthly_trend, TREND_WINDOW_MONTHS};
