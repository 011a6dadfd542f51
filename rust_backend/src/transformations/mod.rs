//! Record-set transformations applied between normalization and aggregation.

pub mod filtering;

pub use filtering::{filter_records, RecordFilters};
