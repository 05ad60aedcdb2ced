//! Strategies combining a condition-wise metric over the condition series of a bin.
//!
//! With `f1` a metric and `f2` a combiner, over `N` conditions:
//!
//! - two-point: `f2(f1(N-1), f1(0))`
//! - fixed: `sum over i in 1..N of f2(f1(i), f1(0))`
//! - global: `sum over i in 1..N of f2(f1(i), f1(i-1))`
//!
//! Strategies only evaluate the conditions they need.

use std::fmt::{self, Display};

use gpseq_core::models::Bin;

use crate::combiners::Combiner;
use crate::errors::Result;
use crate::metrics::MetricCalculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Compare the last condition to the first one
    TwoPoint,
    /// Compare every condition to the first one
    Fixed,
    /// Compare every condition to the previous one
    Global,
}

impl Strategy {
    /// Suffix of the strategy in metric names, e.g. `prob_2p`.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Strategy::TwoPoint => "2p",
            Strategy::Fixed => "f",
            Strategy::Global => "g",
        }
    }

    pub fn estimate(
        &self,
        bin: &Bin,
        calculator: MetricCalculator,
        combiner: Combiner,
    ) -> Result<f64> {
        let f1 = |bin: &Bin, ci: usize| calculator.evaluate(bin, ci);
        let f2 = |later: f64, earlier: f64| combiner.combine(later, earlier);

        match self {
            Strategy::TwoPoint => est_2p(bin, f1, f2),
            Strategy::Fixed => est_f(bin, f1, f2),
            Strategy::Global => est_g(bin, f1, f2),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

///
/// Two-point estimate: the last condition against the first.
///
/// With a single condition, the condition is compared to itself.
///
pub fn est_2p<F1, F2>(bin: &Bin, f1: F1, f2: F2) -> Result<f64>
where
    F1: Fn(&Bin, usize) -> Result<f64>,
    F2: Fn(f64, f64) -> Result<f64>,
{
    let a = f1(bin, 0)?;
    let b = f1(bin, bin.n_conditions().saturating_sub(1))?;
    f2(b, a)
}

///
/// Fixed estimate: every condition against the first.
///
pub fn est_f<F1, F2>(bin: &Bin, f1: F1, f2: F2) -> Result<f64>
where
    F1: Fn(&Bin, usize) -> Result<f64>,
    F2: Fn(f64, f64) -> Result<f64>,
{
    let a = f1(bin, 0)?;
    (1..bin.n_conditions()).try_fold(0.0, |out, i| Ok(out + f2(f1(bin, i)?, a)?))
}

///
/// Global estimate: every condition against the previous one.
///
pub fn est_g<F1, F2>(bin: &Bin, f1: F1, f2: F2) -> Result<f64>
where
    F1: Fn(&Bin, usize) -> Result<f64>,
    F2: Fn(f64, f64) -> Result<f64>,
{
    let mut out = 0.0;
    let mut a = f1(bin, 0)?;
    for i in 1..bin.n_conditions() {
        let b = f1(bin, i)?;
        out += f2(b, a)?;
        a = b;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    use gpseq_core::models::ConditionStats;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::errors::CentralityError;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
    }

    fn make_bin(sums: &[f64], stds: &[f64]) -> Bin {
        let conditions = sums
            .iter()
            .zip(stds)
            .map(|(&sum, &std)| ConditionStats::new(sum, 1.0, 100.0, 1.0, std))
            .collect();
        Bin::new("b1", "chr1", 0, 1000, conditions).unwrap()
    }

    #[fixture]
    fn bin() -> Bin {
        make_bin(&[10.0, 20.0, 30.0], &[1.0, 2.0, 4.0])
    }

    #[rstest]
    fn test_probability_scenario(bin: Bin) {
        let p = MetricCalculator::Probability;
        assert_close(Strategy::TwoPoint.estimate(&bin, p, Combiner::Ratio).unwrap(), 3.0);
        assert_close(Strategy::Fixed.estimate(&bin, p, Combiner::Ratio).unwrap(), 5.0);
        // 0.2 / 0.1 + 0.3 / 0.2
        assert_close(Strategy::Global.estimate(&bin, p, Combiner::Ratio).unwrap(), 3.5);
    }

    #[rstest]
    fn test_two_point_ignores_intermediate_conditions(bin: Bin) {
        let altered = make_bin(&[10.0, 999.0, 30.0], &[1.0, 0.0, 4.0]);

        // cumulative metrics read the intermediate conditions by definition
        for calculator in [
            MetricCalculator::Probability,
            MetricCalculator::Variance,
            MetricCalculator::FanoFactor,
            MetricCalculator::CoefficientOfVariation,
        ] {
            let combiner = calculator.combiner();
            assert_eq!(
                Strategy::TwoPoint.estimate(&bin, calculator, combiner).ok(),
                Strategy::TwoPoint.estimate(&altered, calculator, combiner).ok(),
                "{}",
                calculator
            );
        }
    }

    #[rstest]
    fn test_two_point_skips_degenerate_intermediate() {
        // the middle condition has a zero mean, two-point never looks at it
        let conditions = vec![
            ConditionStats::new(1.0, 1.0, 1.0, 1.0, 1.0),
            ConditionStats::new(1.0, 1.0, 1.0, 0.0, 1.0),
            ConditionStats::new(1.0, 1.0, 1.0, 2.0, 1.0),
        ];
        let bin = Bin::new("b1", "chr1", 0, 10, conditions).unwrap();
        let cv = MetricCalculator::CoefficientOfVariation;

        assert_close(Strategy::TwoPoint.estimate(&bin, cv, Combiner::Difference).unwrap(), 0.5);
        assert!(Strategy::Fixed.estimate(&bin, cv, Combiner::Difference).is_err());
    }

    #[rstest]
    fn test_fixed_is_sum_of_pairwise_comparisons(bin: Bin) {
        let var = MetricCalculator::Variance;
        let reference = var.evaluate(&bin, 0).unwrap();
        let expected: f64 = (1..bin.n_conditions())
            .map(|i| Combiner::LogRatio.combine(var.evaluate(&bin, i).unwrap(), reference).unwrap())
            .sum();

        assert_close(Strategy::Fixed.estimate(&bin, var, Combiner::LogRatio).unwrap(), expected);
    }

    #[rstest]
    fn test_global_log_ratio_telescopes(bin: Bin) {
        for calculator in [
            MetricCalculator::Probability,
            MetricCalculator::CumulativeProbability,
            MetricCalculator::Variance,
        ] {
            let global = Strategy::Global.estimate(&bin, calculator, Combiner::LogRatio).unwrap();
            let two_point = Strategy::TwoPoint
                .estimate(&bin, calculator, Combiner::LogRatio)
                .unwrap();
            assert_close(global, two_point);
        }
    }

    #[rstest]
    fn test_single_condition() {
        let bin = make_bin(&[10.0], &[2.0]);
        let p = MetricCalculator::Probability;

        assert_eq!(Strategy::TwoPoint.estimate(&bin, p, Combiner::Ratio).unwrap(), 1.0);
        assert_eq!(Strategy::Fixed.estimate(&bin, p, Combiner::Ratio).unwrap(), 0.0);
        assert_eq!(Strategy::Global.estimate(&bin, p, Combiner::Ratio).unwrap(), 0.0);
    }

    #[rstest]
    fn test_custom_functions(bin: Bin) {
        let f1 = |bin: &Bin, ci: usize| Ok::<f64, CentralityError>(bin.conditions()[ci].sum);
        let f2 = |later: f64, earlier: f64| Ok::<f64, CentralityError>(later - earlier);

        assert_eq!(est_2p(&bin, f1, f2).unwrap(), 20.0);
        assert_eq!(est_f(&bin, f1, f2).unwrap(), 30.0);
        assert_eq!(est_g(&bin, f1, f2).unwrap(), 20.0);
    }

    #[rstest]
    fn test_errors_propagate(bin: Bin) {
        let f1 = |bin: &Bin, ci: usize| MetricCalculator::Probability.evaluate(bin, ci + 1);
        let result = est_f(&bin, f1, |x, y| Ok(x / y));

        assert!(matches!(
            result,
            Err(CentralityError::ConditionOutOfRange { ci: 3, n: 3 })
        ));
    }
}
