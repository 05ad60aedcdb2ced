//! Core data model for GPSeq centrality estimation.
//!
//! This crate holds the tables exchanged between the external table assembler
//! (BED parsing, cutsite detection) and the centrality engine:
//!
//! - [`ConditionStats`]: aggregated read statistics of one bin in one condition
//! - [`Bin`]: a genomic interval with its ordered sequence of condition statistics
//! - [`MultiConditionTable`]: all bins of an experiment, grouped by bin key
//! - [`EstimateTable`] and [`RankTable`]: the centrality results
//!
//! # Example
//!
//! ```
//! use gpseq_core::models::{ConditionRow, ConditionStats, MultiConditionTable};
//!
//! let rows = vec![
//!     ConditionRow::new("b1", "chr1", 0, 1000, 0, ConditionStats::new(10.0, 1.0, 100.0, 10.0, 2.0)),
//!     ConditionRow::new("b1", "chr1", 0, 1000, 1, ConditionStats::new(20.0, 1.0, 100.0, 20.0, 3.0)),
//! ];
//!
//! let table = MultiConditionTable::from_rows(rows).unwrap();
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.n_conditions(), 2);
//! ```

pub mod errors;
pub mod models;

// re-exports
pub use errors::CoreError;
pub use models::{
    Bin, BinFailure, ConditionRow, ConditionStats, EstimateRow, EstimateTable,
    MultiConditionTable, RankTable,
};
