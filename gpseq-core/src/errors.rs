use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Bin {0} has no condition records")]
    EmptyBin(String),

    #[error("Invalid coordinates for bin {key}: start ({start}) must be smaller than end ({end})")]
    InvalidCoordinates { key: String, start: u32, end: u32 },

    #[error("Bin {key} declares condition {condition} more than once")]
    DuplicateCondition { key: String, condition: usize },

    #[error("Bin key {0} appears more than once in the table")]
    DuplicateBin(String),

    #[error("Estimate row for bin {key} has {found} values, table has {expected} metrics")]
    RowWidthMismatch {
        key: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
