//! Gains domain module.
//!
//! Per-project metric data (category totals and a time series) read from a
//! local file and reconciled against the fetched repositories.
//!
//! # Module Structure
//!
//! - `model`: `GainsRecord`, `GainEntry`, `GainPoint`, `GainsSummary`
//! - `ops`: reconciliation, aggregation and CSV export
//! - `repository`: `GainsRepository` trait for the local file

mod model;
mod ops;
pub mod repository;

// Re-export public API
pub use model::{GainEntry, GainPoint, GainsMap, GainsRecord, GainsSummary, parse_gains};
pub use ops::{aggregate_by_label, gains_for, reconcile, summarize, to_csv};
pub use repository::GainsRepository;
