#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Bin labels sorted ascending by each metric, one column per metric.
///
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankTable {
    columns: Vec<(String, Vec<String>)>,
}

impl RankTable {
    pub fn new() -> Self {
        RankTable::default()
    }

    pub fn push_column(&mut self, metric: impl Into<String>, labels: Vec<String>) {
        self.columns.push((metric.into(), labels));
    }

    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(metric, _)| metric.as_str())
    }

    pub fn column(&self, metric: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(m, _)| m == metric)
            .map(|(_, labels)| labels.as_slice())
    }

    /// Number of metric columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|(metric, labels)| (metric.as_str(), labels.as_slice()))
    }
}
