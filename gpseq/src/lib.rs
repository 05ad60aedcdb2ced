//! Centrality estimation of genomic bins from GPSeq sequencing data.
//!
//! Each module is behind a feature of the same name, both enabled by default:
//!
//! - `core`: per-condition bin statistics and result tables
//! - `centrality`: metric calculators, estimators, the bin reducer and the ranker
//!
//! Enable `serde` to (de)serialize the tables of `core`.

#[cfg(feature = "core")]
#[doc(inline)]
pub use gpseq_core as core;

#[cfg(feature = "centrality")]
#[doc(inline)]
pub use gpseq_centrality as centrality;
