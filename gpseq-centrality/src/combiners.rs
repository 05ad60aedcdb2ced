//! Functions putting two conditions together.
//!
//! Every combiner takes `(later, earlier)`: the metric value of the later
//! condition in the series first.

use std::fmt::{self, Display};

use crate::errors::{CentralityError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combiner {
    /// `later / earlier`
    Ratio,
    /// `ln(later / earlier)`
    LogRatio,
    /// `earlier - later`
    Difference,
}

impl Combiner {
    pub const fn name(&self) -> &'static str {
        match self {
            Combiner::Ratio => "ratio",
            Combiner::LogRatio => "log-ratio",
            Combiner::Difference => "difference",
        }
    }

    pub fn combine(&self, later: f64, earlier: f64) -> Result<f64> {
        match self {
            Combiner::Ratio => ratio(later, earlier),
            Combiner::LogRatio => log_ratio(later, earlier),
            Combiner::Difference => difference(later, earlier),
        }
    }
}

impl Display for Combiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn ratio(later: f64, earlier: f64) -> Result<f64> {
    if earlier == 0.0 {
        return Err(CentralityError::ZeroDenominator { combiner: "ratio" });
    }
    Ok(later / earlier)
}

pub fn log_ratio(later: f64, earlier: f64) -> Result<f64> {
    if earlier == 0.0 {
        return Err(CentralityError::ZeroDenominator {
            combiner: "log-ratio",
        });
    }
    let ratio = later / earlier;
    if ratio.is_nan() || ratio <= 0.0 {
        return Err(CentralityError::LogDomain { ratio });
    }
    Ok(ratio.ln())
}

/// Note the argument order: the earlier condition minus the later one.
pub fn difference(later: f64, earlier: f64) -> Result<f64> {
    Ok(earlier - later)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(Combiner::Ratio, 0.3, 0.1, 3.0)]
    #[case(Combiner::LogRatio, std::f64::consts::E, 1.0, 1.0)]
    #[case(Combiner::Difference, 0.5, 2.0, 1.5)]
    fn test_combine(
        #[case] combiner: Combiner,
        #[case] later: f64,
        #[case] earlier: f64,
        #[case] expected: f64,
    ) {
        let value = combiner.combine(later, earlier).unwrap();
        assert!((value - expected).abs() < 1e-12);
    }

    #[rstest]
    fn test_ratio_by_zero() {
        assert!(matches!(
            ratio(1.0, 0.0),
            Err(CentralityError::ZeroDenominator { combiner: "ratio" })
        ));
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(-1.0, 1.0)]
    #[case(f64::NAN, 1.0)]
    #[case(1.0, -2.0)]
    fn test_log_ratio_domain(#[case] later: f64, #[case] earlier: f64) {
        assert!(matches!(
            log_ratio(later, earlier),
            Err(CentralityError::LogDomain { .. })
        ));
    }

    #[rstest]
    fn test_difference_is_earlier_minus_later() {
        assert_eq!(difference(3.0, 1.0).unwrap(), -2.0);
        assert_eq!(Combiner::Difference.combine(0.0, 0.0).unwrap(), 0.0);
    }
}
