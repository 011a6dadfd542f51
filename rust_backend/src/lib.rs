//! # EMT Rust Backend
//!
//! Analytics and reporting engine for the Equipment Maintenance Tracker
//! (EMT) system.
//!
//! The engine takes the raw maintenance and verification record collections
//! plus a period/filter selection and produces every derived structure the
//! dashboards and reports render: status/type/area/category distributions,
//! the trailing-twelve-months trend, critical-versus-regular splits,
//! verification outcome tallies, per-equipment-type recurrence intervals and
//! equipment rankings.
//!
//! ## Architecture
//!
//! - [`api`]: serializable DTOs handed to rendering collaborators
//! - [`models`]: canonical records, periods and report descriptors
//! - [`parsing`]: normalization of loosely-typed raw records
//! - [`transformations`]: period and criteria filtering
//! - [`services`]: the aggregators plus dashboard/report/export orchestration
//! - [`db`]: record source and saved-report store abstractions
//! - [`config`]: TOML configuration surface
//!
//! Every aggregator is a pure function of `(records, period, filters)`; the
//! engine holds no shared mutable state, so all of them are safe to call
//! concurrently. The only asynchronous boundaries are the record fetch and
//! the export pipeline.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
pub mod transformations;

pub use error::{EngineError, EngineResult};
