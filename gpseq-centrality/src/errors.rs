use gpseq_core::errors::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CentralityError {
    #[error("Requested condition (index {ci}) not found: bin has {n} conditions")]
    ConditionOutOfRange { ci: usize, n: usize },

    #[error("Division by zero computing `{metric}` at condition {ci}: `{field}` is zero")]
    DivisionByZero {
        metric: &'static str,
        ci: usize,
        field: &'static str,
    },

    #[error("Division by zero in {combiner} combiner: earlier value is zero")]
    ZeroDenominator { combiner: &'static str },

    #[error("Logarithm of non-positive ratio {ratio}")]
    LogDomain { ratio: f64 },

    #[error("Failed to estimate bin {key}: {source}")]
    Bin {
        key: String,
        #[source]
        source: Box<CentralityError>,
    },

    #[error("Centrality estimation was cancelled")]
    Cancelled,

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, CentralityError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Number of threads must be at least 1")]
    InvalidThreads,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
