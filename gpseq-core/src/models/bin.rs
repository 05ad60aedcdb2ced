use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, Result};
use crate::models::ConditionStats;

///
/// A genomic bin with its statistics over an ordered series of conditions.
///
/// Conditions are stored positionally: `conditions()[i]` is condition `i`.
/// The order encodes the experimental series (e.g. increasing distance
/// from the nuclear lamina) and is never changed after construction.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BinRecord"))]
pub struct Bin {
    key: String,
    chrom: String,
    start: u32,
    end: u32,
    conditions: Vec<ConditionStats>,
}

impl Bin {
    ///
    /// Create a new [Bin].
    ///
    /// # Arguments
    /// - key: identifier of the bin, unique within a table
    /// - chrom: chromosome name
    /// - start: start coordinate, must be smaller than `end`
    /// - end: end coordinate
    /// - conditions: per-condition statistics, in experimental order
    ///
    pub fn new(
        key: impl Into<String>,
        chrom: impl Into<String>,
        start: u32,
        end: u32,
        conditions: Vec<ConditionStats>,
    ) -> Result<Self> {
        let key = key.into();

        if start >= end {
            return Err(CoreError::InvalidCoordinates { key, start, end });
        }
        if conditions.is_empty() {
            return Err(CoreError::EmptyBin(key));
        }

        Ok(Bin {
            key,
            chrom: chrom.into(),
            start,
            end,
            conditions,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    pub fn conditions(&self) -> &[ConditionStats] {
        &self.conditions
    }

    /// Number of conditions, `N`.
    pub fn n_conditions(&self) -> usize {
        self.conditions.len()
    }

    /// Statistics of condition `ci`, if `ci < N`.
    pub fn condition(&self, ci: usize) -> Option<&ConditionStats> {
        self.conditions.get(ci)
    }

    ///
    /// Label used when ranking bins.
    ///
    /// # Arguments
    /// - chromosome_wide: label with the chromosome name only instead of `chrom:start-end`
    ///
    pub fn label(&self, chromosome_wide: bool) -> String {
        bin_label(&self.chrom, self.start, self.end, chromosome_wide)
    }
}

/// Unvalidated [Bin] as read by serde.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BinRecord {
    key: String,
    chrom: String,
    start: u32,
    end: u32,
    conditions: Vec<ConditionStats>,
}

#[cfg(feature = "serde")]
impl TryFrom<BinRecord> for Bin {
    type Error = CoreError;

    fn try_from(record: BinRecord) -> Result<Self> {
        Bin::new(
            record.key,
            record.chrom,
            record.start,
            record.end,
            record.conditions,
        )
    }
}

impl Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(false))
    }
}

///
/// Format a bin label: `chrom` when `chromosome_wide`, `chrom:start-end` otherwise.
///
pub fn bin_label(chrom: &str, start: u32, end: u32, chromosome_wide: bool) -> String {
    if chromosome_wide {
        chrom.to_string()
    } else {
        format!("{}:{}-{}", chrom, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn stats() -> Vec<ConditionStats> {
        vec![
            ConditionStats::new(10.0, 1.0, 100.0, 1.0, 1.0),
            ConditionStats::new(20.0, 1.0, 100.0, 2.0, 1.0),
        ]
    }

    #[rstest]
    fn test_new_bin(stats: Vec<ConditionStats>) {
        let bin = Bin::new("b1", "chr1", 100, 200, stats).unwrap();
        assert_eq!(bin.key(), "b1");
        assert_eq!(bin.n_conditions(), 2);
        assert_eq!(bin.width(), 100);
        assert_eq!(bin.condition(1).map(|s| s.sum), Some(20.0));
        assert!(bin.condition(2).is_none());
    }

    #[rstest]
    #[case(200, 200)]
    #[case(300, 200)]
    fn test_invalid_coordinates(stats: Vec<ConditionStats>, #[case] start: u32, #[case] end: u32) {
        let result = Bin::new("b1", "chr1", start, end, stats);
        assert_eq!(
            result,
            Err(CoreError::InvalidCoordinates {
                key: "b1".to_string(),
                start,
                end
            })
        );
    }

    #[rstest]
    fn test_empty_bin() {
        let result = Bin::new("b1", "chr1", 0, 10, vec![]);
        assert_eq!(result, Err(CoreError::EmptyBin("b1".to_string())));
    }

    #[rstest]
    fn test_labels(stats: Vec<ConditionStats>) {
        let bin = Bin::new("b1", "chr2", 1000, 2000, stats).unwrap();
        assert_eq!(bin.label(false), "chr2:1000-2000");
        assert_eq!(bin.label(true), "chr2");
        assert_eq!(bin.to_string(), "chr2:1000-2000");
    }
}
