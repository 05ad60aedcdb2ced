//! Per-bin reduction of a multi-condition table into centrality estimates.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use gpseq_core::models::{Bin, BinFailure, EstimateRow, EstimateTable, MultiConditionTable};

use crate::consts::ESTIMATE_MESSAGE;
use crate::errors::{CentralityError, Result};
use crate::progress::{ProgressObserver, Silent, progress_bar};
use crate::registry::{MetricSpec, resolve_metrics};

/// What to do when the estimation of a bin fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop and return the error of the first failing bin, in input order
    #[default]
    Abort,
    /// Leave failing bins out of the table and record them as failures
    Isolate,
}

///
/// Computes the requested centrality metrics for every bin of a table.
///
/// ```
/// use gpseq_centrality::{BinReducer, FailurePolicy};
/// use gpseq_centrality::progress::Silent;
/// use gpseq_core::models::{ConditionRow, ConditionStats, MultiConditionTable};
///
/// let rows = (0..3).map(|ci| {
///     let sum = 10.0 * (ci + 1) as f64;
///     ConditionRow::new("b1", "chr1", 0, 100, ci, ConditionStats::new(sum, 1.0, 100.0, 1.0, 1.0))
/// });
/// let table = MultiConditionTable::from_rows(rows).unwrap();
///
/// let estimates = BinReducer::new(&["prob_f", "not_a_metric"])
///     .with_failure_policy(FailurePolicy::Isolate)
///     .reduce(&table, &Silent)
///     .unwrap();
///
/// assert_eq!(estimates.metrics(), &["prob_f".to_string()]);
/// assert!((estimates.value(0, "prob_f").unwrap() - 5.0).abs() < 1e-12);
/// ```
///
#[derive(Debug, Clone)]
pub struct BinReducer {
    metrics: Vec<&'static MetricSpec>,
    threads: Option<usize>,
    failure_policy: FailurePolicy,
    cancel: Option<Arc<AtomicBool>>,
}

impl BinReducer {
    ///
    /// Create a reducer for the given metric names.
    ///
    /// Names outside of the known set are skipped.
    ///
    pub fn new<S: AsRef<str>>(metric_names: &[S]) -> Self {
        BinReducer {
            metrics: resolve_metrics(metric_names),
            threads: None,
            failure_policy: FailurePolicy::default(),
            cancel: None,
        }
    }

    ///
    /// Process bins on a dedicated pool of `threads` workers. `0` and `1` run
    /// sequentially on the calling thread.
    ///
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    ///
    /// Stop before starting new bins once `flag` is set.
    ///
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Names of the metrics this reducer computes, in column order.
    pub fn metric_names(&self) -> Vec<String> {
        self.metrics.iter().map(|spec| spec.name.to_string()).collect()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    ///
    /// Estimate every metric for a single bin.
    ///
    pub fn estimate_bin(&self, bin: &Bin) -> Result<EstimateRow> {
        let values = self
            .metrics
            .iter()
            .map(|spec| spec.estimate(bin))
            .collect::<Result<Vec<f64>>>()?;

        Ok(EstimateRow::new(
            bin.key(),
            bin.chrom(),
            bin.start(),
            bin.end(),
            values,
        ))
    }

    ///
    /// Reduce every bin of `table` to one estimate row.
    ///
    /// Rows follow the bin order of the table, whatever the number of threads.
    ///
    /// # Arguments
    /// - table: the multi-condition table
    /// - observer: told once per processed bin
    ///
    pub fn reduce(
        &self,
        table: &MultiConditionTable,
        observer: &dyn ProgressObserver,
    ) -> Result<EstimateTable> {
        info!(
            "Estimating {} metric(s) over {} bins",
            self.metrics.len(),
            table.len()
        );
        observer.start(table.len() as u64, ESTIMATE_MESSAGE);
        let result = self.reduce_bins(table, observer);
        observer.finish();

        let estimates = result?;
        info!(
            "Estimated {} bins ({} failed)",
            estimates.len(),
            estimates.failures().len()
        );

        Ok(estimates)
    }

    ///
    /// [BinReducer::reduce] with an optional progress bar on stderr.
    ///
    pub fn run(&self, table: &MultiConditionTable, show_progress: bool) -> Result<EstimateTable> {
        if show_progress {
            self.reduce(table, &progress_bar())
        } else {
            self.reduce(table, &Silent)
        }
    }

    fn reduce_bins(
        &self,
        table: &MultiConditionTable,
        observer: &dyn ProgressObserver,
    ) -> Result<EstimateTable> {
        let mut estimates = EstimateTable::new(self.metric_names());

        match self.threads {
            Some(threads) if threads > 1 => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;

                let results: Vec<Result<EstimateRow>> = pool.install(|| {
                    table
                        .bins()
                        .par_iter()
                        .map(|bin| self.process(bin, observer))
                        .collect()
                });

                for (bin, result) in table.bins().iter().zip(results) {
                    self.collect(&mut estimates, bin, result)?;
                }
            }
            _ => {
                for bin in table {
                    let result = self.process(bin, observer);
                    self.collect(&mut estimates, bin, result)?;
                }
            }
        }

        Ok(estimates)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn process(&self, bin: &Bin, observer: &dyn ProgressObserver) -> Result<EstimateRow> {
        if self.is_cancelled() {
            return Err(CentralityError::Cancelled);
        }
        let row = self.estimate_bin(bin);
        observer.advance();
        row
    }

    fn collect(
        &self,
        estimates: &mut EstimateTable,
        bin: &Bin,
        result: Result<EstimateRow>,
    ) -> Result<()> {
        match result {
            Ok(row) => estimates.push_row(row)?,
            Err(CentralityError::Cancelled) => return Err(CentralityError::Cancelled),
            Err(e) => match self.failure_policy {
                FailurePolicy::Abort => {
                    return Err(CentralityError::Bin {
                        key: bin.key().to_string(),
                        source: Box::new(e),
                    });
                }
                FailurePolicy::Isolate => {
                    warn!("Skipping bin {} ({}): {}", bin.key(), bin, e);
                    estimates.push_failure(BinFailure {
                        key: bin.key().to_string(),
                        reason: e.to_string(),
                    });
                }
            },
        }
        Ok(())
    }
}

///
/// Estimate centrality for each bin of a multi-condition table.
///
/// # Arguments
/// - table: the multi-condition table
/// - metric_names: metrics to compute; unknown names are skipped
/// - show_progress: draw a progress bar on stderr
///
pub fn bin_estimate<S: AsRef<str>>(
    table: &MultiConditionTable,
    metric_names: &[S],
    show_progress: bool,
) -> Result<EstimateTable> {
    BinReducer::new(metric_names).run(table, show_progress)
}
