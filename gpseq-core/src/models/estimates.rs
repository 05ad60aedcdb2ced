#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, Result};
use crate::models::bin_label;

///
/// Centrality estimates of one bin, one value per metric of the owning table.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EstimateRow {
    pub key: String,
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub values: Vec<f64>,
}

impl EstimateRow {
    pub fn new(
        key: impl Into<String>,
        chrom: impl Into<String>,
        start: u32,
        end: u32,
        values: Vec<f64>,
    ) -> Self {
        EstimateRow {
            key: key.into(),
            chrom: chrom.into(),
            start,
            end,
            values,
        }
    }

    pub fn label(&self, chromosome_wide: bool) -> String {
        bin_label(&self.chrom, self.start, self.end, chromosome_wide)
    }
}

/// A bin left out of an [EstimateTable] because its estimation failed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinFailure {
    pub key: String,
    pub reason: String,
}

///
/// One row per bin: coordinates plus one column per metric.
///
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EstimateTableRecord"))]
pub struct EstimateTable {
    metrics: Vec<String>,
    rows: Vec<EstimateRow>,
    failures: Vec<BinFailure>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct EstimateTableRecord {
    metrics: Vec<String>,
    rows: Vec<EstimateRow>,
    failures: Vec<BinFailure>,
}

#[cfg(feature = "serde")]
impl TryFrom<EstimateTableRecord> for EstimateTable {
    type Error = CoreError;

    fn try_from(record: EstimateTableRecord) -> Result<Self> {
        let mut table = EstimateTable::new(record.metrics);
        for row in record.rows {
            table.push_row(row)?;
        }
        table.failures = record.failures;
        Ok(table)
    }
}

impl EstimateTable {
    ///
    /// Create an empty table with the given metric columns.
    ///
    pub fn new(metrics: Vec<String>) -> Self {
        EstimateTable {
            metrics,
            rows: Vec::new(),
            failures: Vec::new(),
        }
    }

    ///
    /// Append a row. The row must carry one value per metric column.
    ///
    pub fn push_row(&mut self, row: EstimateRow) -> Result<()> {
        if row.values.len() != self.metrics.len() {
            return Err(CoreError::RowWidthMismatch {
                key: row.key,
                expected: self.metrics.len(),
                found: row.values.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn push_failure(&mut self, failure: BinFailure) {
        self.failures.push(failure);
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn rows(&self) -> &[EstimateRow] {
        &self.rows
    }

    pub fn failures(&self) -> &[BinFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EstimateRow> {
        self.rows.iter()
    }

    pub fn has_metric(&self, metric: &str) -> bool {
        self.metric_index(metric).is_some()
    }

    pub fn metric_index(&self, metric: &str) -> Option<usize> {
        self.metrics.iter().position(|m| m == metric)
    }

    ///
    /// All values of a metric column, in row order.
    ///
    pub fn column(&self, metric: &str) -> Option<Vec<f64>> {
        let idx = self.metric_index(metric)?;
        Some(self.rows.iter().map(|row| row.values[idx]).collect())
    }

    ///
    /// Value of `metric` in row `row`
    ///
    pub fn value(&self, row: usize, metric: &str) -> Option<f64> {
        let idx = self.metric_index(metric)?;
        self.rows.get(row).and_then(|r| r.values.get(idx)).copied()
    }
}
