//! Ranking of bins by their centrality estimates.

use log::{debug, info};

use gpseq_core::models::{EstimateTable, RankTable};

use crate::consts::RANK_MESSAGE;
use crate::progress::{ProgressObserver, Silent, progress_bar};

///
/// Indices that sort `values` ascending.
///
/// Uses the IEEE total order, so NaN sorts after `+inf`. Equal values keep
/// their original order.
///
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    order
}

///
/// Rank bins by each requested metric.
///
/// Every column of the output holds all bin labels, sorted ascending by the
/// metric. Metrics missing from `estimates` are skipped.
///
/// # Arguments
/// - estimates: the output of the bin reducer
/// - metric_names: metrics to rank by, in output column order
/// - observer: told once per ranked metric
/// - chromosome_wide: label bins by chromosome instead of `chrom:start-end`
///
pub fn rank<S: AsRef<str>>(
    estimates: &EstimateTable,
    metric_names: &[S],
    observer: &dyn ProgressObserver,
    chromosome_wide: bool,
) -> RankTable {
    let mut present: Vec<&str> = Vec::with_capacity(metric_names.len());
    for name in metric_names {
        let name = name.as_ref();
        if !estimates.has_metric(name) {
            debug!("Metric {} not found in estimates, skipping", name);
        } else if !present.contains(&name) {
            present.push(name);
        }
    }

    info!("Ranking {} bins by {} metric(s)", estimates.len(), present.len());
    observer.start(present.len() as u64, RANK_MESSAGE);

    let labels: Vec<String> = estimates
        .iter()
        .map(|row| row.label(chromosome_wide))
        .collect();

    let mut ranks = RankTable::new();
    for metric in present {
        let values = estimates.column(metric).unwrap_or_default();
        let sorted = argsort(&values)
            .into_iter()
            .map(|i| labels[i].clone())
            .collect();
        ranks.push_column(metric, sorted);
        observer.advance();
    }

    observer.finish();
    ranks
}

///
/// [rank] with an optional progress bar on stderr.
///
pub fn rank_bins<S: AsRef<str>>(
    estimates: &EstimateTable,
    metric_names: &[S],
    show_progress: bool,
    chromosome_wide: bool,
) -> RankTable {
    if show_progress {
        rank(estimates, metric_names, &progress_bar(), chromosome_wide)
    } else {
        rank(estimates, metric_names, &Silent, chromosome_wide)
    }
}
