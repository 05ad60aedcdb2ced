pub mod bin;
pub mod condition;
pub mod estimates;
pub mod ranks;
pub mod table;

// re-export for cleaner imports
pub use self::bin::{Bin, bin_label};
pub use self::condition::{ConditionRow, ConditionStats};
pub use self::estimates::{BinFailure, EstimateRow, EstimateTable};
pub use self::ranks::RankTable;
pub use self::table::MultiConditionTable;
