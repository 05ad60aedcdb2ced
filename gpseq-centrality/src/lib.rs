//! Centrality estimation and ranking of genomic bins.
//!
//! GPSeq digests chromatin from the nuclear periphery inward over a series of
//! increasing durations. Bins close to the periphery saturate early, so how a
//! bin's signal grows across the condition series says how central it is.
//!
//! This crate provides:
//!
//! - Per-condition metric calculators (`p`, `pc`, `pr`, `var`, `ff`, `cv`)
//! - Condition combiners (ratio, log-ratio, difference)
//! - Estimation strategies over the series (two-point, fixed, global)
//! - A registry of the fifteen named estimates such as `prob_2p` or `cv_f`
//! - A bin reducer producing one row of estimates per bin, optionally in parallel
//! - A ranker sorting bin labels by each estimate
//!
//! # Example
//!
//! ```
//! use gpseq_centrality::{bin_estimate, rank_bins};
//! use gpseq_core::models::{ConditionRow, ConditionStats, MultiConditionTable};
//!
//! let rows = vec![
//!     ConditionRow::new("b1", "chr1", 0, 100, 0, ConditionStats::new(10.0, 1.0, 100.0, 1.0, 1.0)),
//!     ConditionRow::new("b1", "chr1", 0, 100, 1, ConditionStats::new(30.0, 1.0, 100.0, 1.0, 1.0)),
//!     ConditionRow::new("b2", "chr1", 100, 200, 0, ConditionStats::new(10.0, 1.0, 100.0, 1.0, 1.0)),
//!     ConditionRow::new("b2", "chr1", 100, 200, 1, ConditionStats::new(20.0, 1.0, 100.0, 1.0, 1.0)),
//! ];
//! let table = MultiConditionTable::from_rows(rows).unwrap();
//!
//! let estimates = bin_estimate(&table, &["prob_2p"], false).unwrap();
//! let ranks = rank_bins(&estimates, &["prob_2p"], false, false);
//!
//! assert_eq!(ranks.column("prob_2p").unwrap()[0], "chr1:100-200");
//! ```

pub mod combiners;
pub mod config;
pub mod consts;
pub mod errors;
pub mod estimators;
pub mod metrics;
pub mod progress;
pub mod ranking;
pub mod reducer;
pub mod registry;

// re-exports
pub use combiners::Combiner;
pub use config::CentralityConfig;
pub use errors::{CentralityError, ConfigError};
pub use estimators::Strategy;
pub use metrics::MetricCalculator;
pub use progress::ProgressObserver;
pub use ranking::{rank, rank_bins};
pub use reducer::{BinReducer, FailurePolicy, bin_estimate};
pub use registry::{METRICS, MetricSpec, metric_names, resolve_metrics};
