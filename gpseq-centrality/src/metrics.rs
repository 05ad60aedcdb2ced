//! Condition-wise metrics.
//!
//! Each metric maps a bin and a condition index `ci` to a scalar. All of them
//! require `ci < N` and fail with [`CentralityError::ConditionOutOfRange`]
//! otherwise.

use std::fmt::{self, Display};

use gpseq_core::models::{Bin, ConditionStats};

use crate::combiners::Combiner;
use crate::errors::{CentralityError, Result};

/// The six condition-wise metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCalculator {
    /// `p`: restriction probability
    Probability,
    /// `pc`: cumulative restriction probability (sum of ratios)
    CumulativeProbability,
    /// `pr`: probability of cumulative restriction (ratio of sums)
    ProbabilityOfCumulative,
    /// `var`: variance
    Variance,
    /// `ff`: Fano factor
    FanoFactor,
    /// `cv`: coefficient of variation
    CoefficientOfVariation,
}

impl MetricCalculator {
    pub const ALL: [MetricCalculator; 6] = [
        MetricCalculator::Probability,
        MetricCalculator::CumulativeProbability,
        MetricCalculator::ProbabilityOfCumulative,
        MetricCalculator::Variance,
        MetricCalculator::FanoFactor,
        MetricCalculator::CoefficientOfVariation,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            MetricCalculator::Probability => "p",
            MetricCalculator::CumulativeProbability => "pc",
            MetricCalculator::ProbabilityOfCumulative => "pr",
            MetricCalculator::Variance => "var",
            MetricCalculator::FanoFactor => "ff",
            MetricCalculator::CoefficientOfVariation => "cv",
        }
    }

    ///
    /// Combiner used to put two conditions of this metric together.
    ///
    /// Probabilities are compared by ratio, variances by log-ratio and
    /// dispersion indexes by difference.
    ///
    pub const fn combiner(&self) -> Combiner {
        match self {
            MetricCalculator::Probability
            | MetricCalculator::CumulativeProbability
            | MetricCalculator::ProbabilityOfCumulative => Combiner::Ratio,
            MetricCalculator::Variance => Combiner::LogRatio,
            MetricCalculator::FanoFactor | MetricCalculator::CoefficientOfVariation => {
                Combiner::Difference
            }
        }
    }

    ///
    /// Evaluate the metric on condition `ci` of `bin`.
    ///
    pub fn evaluate(&self, bin: &Bin, ci: usize) -> Result<f64> {
        match self {
            MetricCalculator::Probability => calc_p(bin, ci),
            MetricCalculator::CumulativeProbability => calc_pc(bin, ci),
            MetricCalculator::ProbabilityOfCumulative => calc_pr(bin, ci),
            MetricCalculator::Variance => calc_var(bin, ci),
            MetricCalculator::FanoFactor => calc_ff(bin, ci),
            MetricCalculator::CoefficientOfVariation => calc_cv(bin, ci),
        }
    }

    ///
    /// Evaluate the metric on every condition of `bin`, in condition order.
    ///
    pub fn profile(&self, bin: &Bin) -> Result<Vec<f64>> {
        (0..bin.n_conditions())
            .map(|ci| self.evaluate(bin, ci))
            .collect()
    }
}

impl Display for MetricCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn condition(bin: &Bin, ci: usize) -> Result<&ConditionStats> {
    bin.condition(ci).ok_or(CentralityError::ConditionOutOfRange {
        ci,
        n: bin.n_conditions(),
    })
}

fn restriction_probability(stats: &ConditionStats, metric: &'static str, ci: usize) -> Result<f64> {
    if stats.cond_nreads == 0.0 {
        return Err(CentralityError::DivisionByZero {
            metric,
            ci,
            field: "cond_nreads",
        });
    }
    if stats.count == 0.0 {
        return Err(CentralityError::DivisionByZero {
            metric,
            ci,
            field: "count",
        });
    }
    Ok(stats.sum / stats.denominator())
}

fn checked_mean(stats: &ConditionStats, metric: &'static str, ci: usize) -> Result<f64> {
    if stats.mean == 0.0 {
        return Err(CentralityError::DivisionByZero {
            metric,
            ci,
            field: "mean",
        });
    }
    Ok(stats.mean)
}

///
/// Restriction probability: `sum / (cond_nreads * count)`.
///
pub fn calc_p(bin: &Bin, ci: usize) -> Result<f64> {
    restriction_probability(condition(bin, ci)?, "p", ci)
}

///
/// Cumulative restriction probability: `p[0] + ... + p[ci]`.
///
pub fn calc_pc(bin: &Bin, ci: usize) -> Result<f64> {
    condition(bin, ci)?;
    bin.conditions()[..=ci]
        .iter()
        .enumerate()
        .try_fold(0.0, |acc, (i, stats)| {
            Ok(acc + restriction_probability(stats, "pc", i)?)
        })
}

///
/// Probability of cumulative restriction:
/// `(sum[0] + ... + sum[ci]) / (cond_nreads[0] * count[0] + ... + cond_nreads[ci] * count[ci])`.
///
/// Equal to [calc_p] on the first condition.
///
pub fn calc_pr(bin: &Bin, ci: usize) -> Result<f64> {
    let stats = condition(bin, ci)?;
    if ci == 0 {
        return restriction_probability(stats, "pr", ci);
    }

    let conditions = &bin.conditions()[..=ci];
    let numerator: f64 = conditions.iter().map(|s| s.sum).sum();
    let denominator: f64 = conditions.iter().map(ConditionStats::denominator).sum();

    if denominator == 0.0 {
        return Err(CentralityError::DivisionByZero {
            metric: "pr",
            ci,
            field: "cond_nreads * count",
        });
    }
    Ok(numerator / denominator)
}

/// Variance: `std^2`.
pub fn calc_var(bin: &Bin, ci: usize) -> Result<f64> {
    Ok(condition(bin, ci)?.std.powi(2))
}

/// Fano factor: `std^2 / mean`.
pub fn calc_ff(bin: &Bin, ci: usize) -> Result<f64> {
    let stats = condition(bin, ci)?;
    Ok(stats.std.powi(2) / checked_mean(stats, "ff", ci)?)
}

/// Coefficient of variation: `std / mean`.
pub fn calc_cv(bin: &Bin, ci: usize) -> Result<f64> {
    let stats = condition(bin, ci)?;
    Ok(stats.std / checked_mean(stats, "cv", ci)?)
}
