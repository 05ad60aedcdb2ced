//! The closed set of centrality metric names.
//!
//! A metric name is `<family>_<strategy>`, where the family selects the
//! condition-wise metric (and with it the combiner) and the strategy selects
//! how conditions are put together:
//!
//! | family | metric | combiner |
//! |---|---|---|
//! | `prob` | restriction probability | ratio |
//! | `cor` | cumulative ratio | ratio |
//! | `roc` | ratio of cumulative | ratio |
//! | `var` | variance | log-ratio |
//! | `ff` | Fano factor | difference |
//! | `cv` | coefficient of variation | difference |
//!
//! The global strategy (`_g`) only exists for the probability families.

use std::fmt::{self, Display};

use log::debug;

use gpseq_core::models::Bin;

use crate::combiners::Combiner;
use crate::errors::Result;
use crate::estimators::Strategy::{self, Fixed, Global, TwoPoint};
use crate::metrics::MetricCalculator::{
    self, CoefficientOfVariation, CumulativeProbability, FanoFactor, Probability,
    ProbabilityOfCumulative, Variance,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricSpec {
    pub name: &'static str,
    pub calculator: MetricCalculator,
    pub combiner: Combiner,
    pub strategy: Strategy,
}

impl MetricSpec {
    const fn new(name: &'static str, calculator: MetricCalculator, strategy: Strategy) -> Self {
        MetricSpec {
            name,
            calculator,
            combiner: calculator.combiner(),
            strategy,
        }
    }

    ///
    /// Find a metric by name. Returns `None` for names outside of the closed set.
    ///
    pub fn lookup(name: &str) -> Option<&'static MetricSpec> {
        METRICS.iter().find(|spec| spec.name == name)
    }

    pub fn all() -> &'static [MetricSpec] {
        &METRICS
    }

    ///
    /// Estimate this metric for a bin.
    ///
    pub fn estimate(&self, bin: &Bin) -> Result<f64> {
        self.strategy.estimate(bin, self.calculator, self.combiner)
    }
}

impl Display for MetricSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub static METRICS: [MetricSpec; 15] = [
    MetricSpec::new("prob_2p", Probability, TwoPoint),
    MetricSpec::new("prob_f", Probability, Fixed),
    MetricSpec::new("prob_g", Probability, Global),
    MetricSpec::new("cor_2p", CumulativeProbability, TwoPoint),
    MetricSpec::new("cor_f", CumulativeProbability, Fixed),
    MetricSpec::new("cor_g", CumulativeProbability, Global),
    MetricSpec::new("roc_2p", ProbabilityOfCumulative, TwoPoint),
    MetricSpec::new("roc_f", ProbabilityOfCumulative, Fixed),
    MetricSpec::new("roc_g", ProbabilityOfCumulative, Global),
    MetricSpec::new("var_2p", Variance, TwoPoint),
    MetricSpec::new("var_f", Variance, Fixed),
    MetricSpec::new("ff_2p", FanoFactor, TwoPoint),
    MetricSpec::new("ff_f", FanoFactor, Fixed),
    MetricSpec::new("cv_2p", CoefficientOfVariation, TwoPoint),
    MetricSpec::new("cv_f", CoefficientOfVariation, Fixed),
];

/// Every known metric name, in registry order.
pub fn metric_names() -> impl Iterator<Item = &'static str> {
    METRICS.iter().map(|spec| spec.name)
}

///
/// Intersect the requested names with the known metrics.
///
/// Requested order is kept. Unknown names are skipped, and so are repeats
/// of a name already resolved.
///
/// # Arguments
/// - requested: metric names, in output column order
///
pub fn resolve_metrics<S: AsRef<str>>(requested: &[S]) -> Vec<&'static MetricSpec> {
    let mut resolved: Vec<&'static MetricSpec> = Vec::with_capacity(requested.len());

    for name in requested {
        let name = name.as_ref();
        match MetricSpec::lookup(name) {
            Some(spec) if resolved.iter().any(|r| r.name == spec.name) => {
                debug!("Skipping repeated metric: {}", name);
            }
            Some(spec) => resolved.push(spec),
            None => debug!("Skipping unrecognized metric: {}", name),
        }
    }

    resolved
}
