#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Aggregated read statistics of one bin in one condition.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionStats {
    /// Aggregated signal in the bin
    pub sum: f64,
    /// Number of observations (e.g. cutsites) in the bin
    pub count: f64,
    /// Total reads of the condition, shared by every bin of that condition
    pub cond_nreads: f64,
    /// Mean signal
    pub mean: f64,
    /// Standard deviation of the signal
    pub std: f64,
}

impl ConditionStats {
    pub fn new(sum: f64, count: f64, cond_nreads: f64, mean: f64, std: f64) -> Self {
        ConditionStats {
            sum,
            count,
            cond_nreads,
            mean,
            std,
        }
    }

    ///
    /// Normalization factor of the restriction probability: `cond_nreads * count`.
    ///
    pub fn denominator(&self) -> f64 {
        self.cond_nreads * self.count
    }
}

///
/// One row of the multi-condition input table, as assembled upstream.
///
/// `condition` is the declared position of the row in the experimental
/// series. Rows are grouped into [`Bin`](crate::models::Bin)s by `bin`.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionRow {
    pub bin: String,
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub condition: usize,
    pub stats: ConditionStats,
}

impl ConditionRow {
    pub fn new(
        bin: impl Into<String>,
        chrom: impl Into<String>,
        start: u32,
        end: u32,
        condition: usize,
        stats: ConditionStats,
    ) -> Self {
        ConditionRow {
            bin: bin.into(),
            chrom: chrom.into(),
            start,
            end,
            condition,
            stats,
        }
    }
}
