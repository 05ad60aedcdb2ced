use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use gpseq_core::models::{EstimateTable, MultiConditionTable, RankTable};

use crate::errors::{ConfigError, ConfigResult, Result};
use crate::ranking::rank_bins;
use crate::reducer::{BinReducer, FailurePolicy};
use crate::registry::metric_names;

///
/// Options of a centrality estimation run, usually read from a `.toml` file:
///
/// ```toml
/// metrics = ["prob_2p", "prob_f", "cv_f"]
/// show_progress = true
/// chromosome_wide = false
/// threads = 4
/// failure_policy = "isolate"
/// ```
///
/// Every key is optional; `metrics` defaults to all known metrics.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CentralityConfig {
    pub metrics: Vec<String>,
    pub show_progress: bool,
    pub chromosome_wide: bool,
    pub threads: Option<usize>,
    pub failure_policy: FailurePolicy,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        CentralityConfig {
            metrics: metric_names().map(String::from).collect(),
            show_progress: false,
            chromosome_wide: false,
            threads: None,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl CentralityConfig {
    fn validate(self) -> ConfigResult<Self> {
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }
        Ok(self)
    }

    ///
    /// Build the bin reducer described by this config.
    ///
    pub fn build_reducer(&self) -> BinReducer {
        let reducer = BinReducer::new(&self.metrics).with_failure_policy(self.failure_policy);
        match self.threads {
            Some(threads) => reducer.with_threads(threads),
            None => reducer,
        }
    }

    ///
    /// Estimate centrality for every bin of `table`, then rank the bins.
    ///
    pub fn run(&self, table: &MultiConditionTable) -> Result<(EstimateTable, RankTable)> {
        let estimates = self.build_reducer().run(table, self.show_progress)?;
        let ranks = rank_bins(
            &estimates,
            &self.metrics,
            self.show_progress,
            self.chromosome_wide,
        );
        Ok((estimates, ranks))
    }
}

impl FromStr for CentralityConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        let config: CentralityConfig = toml::from_str(s)?;
        config.validate()
    }
}

impl TryFrom<&Path> for CentralityConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> ConfigResult<Self> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_defaults() {
        let config: CentralityConfig = "".parse().unwrap();
        assert_eq!(config, CentralityConfig::default());
        assert_eq!(config.metrics.len(), 15);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }

    #[rstest]
    fn test_parse_toml() {
        let config: CentralityConfig = r#"
            metrics = ["prob_2p", "cv_f"]
            chromosome_wide = true
            threads = 4
            failure_policy = "isolate"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.metrics, vec!["prob_2p", "cv_f"]);
        assert!(config.chromosome_wide);
        assert!(!config.show_progress);
        assert_eq!(config.threads, Some(4));
        assert_eq!(config.failure_policy, FailurePolicy::Isolate);

        let reducer = config.build_reducer();
        assert_eq!(reducer.metric_names(), vec!["prob_2p", "cv_f"]);
        assert_eq!(reducer.failure_policy(), FailurePolicy::Isolate);
    }

    #[rstest]
    #[case("threads = 0")]
    #[case("failure_policy = \"retry\"")]
    #[case("metrics = \"prob_2p\"")]
    fn test_invalid_toml(#[case] toml_str: &str) {
        assert!(toml_str.parse::<CentralityConfig>().is_err());
    }

    #[rstest]
    fn test_try_from_path() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "metrics = [\"roc_g\"]").unwrap();
        writeln!(f, "show_progress = false").unwrap();
        f.flush().unwrap();

        let config = CentralityConfig::try_from(f.path()).unwrap();
        assert_eq!(config.metrics, vec!["roc_g"]);
    }

    #[rstest]
    fn test_missing_file() {
        let result = CentralityConfig::try_from(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
