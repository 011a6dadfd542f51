//! Serializable Data Transfer Objects (DTOs).
//!
//! Every type the engine hands to a rendering collaborator lives here:
//! aggregate buckets, trend points, interval statistics, equipment rankings
//! and the composed dashboard payload. These are plain serde structs with no
//! references back into engine internals, so chart and report frontends can
//! consume them as-is.

pub mod types;

pub use types::{
    AggregateBucket, DashboardData, IntervalStat, RankingEntry, SummaryMetrics, TrendPoint,
};
