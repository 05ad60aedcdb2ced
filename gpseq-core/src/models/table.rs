use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, Result};
use crate::models::{Bin, ConditionRow, ConditionStats};

///
/// MultiConditionTable struct, the per-bin view of a multi-condition experiment.
///
/// Bins keep the order in which their key first appears in the input.
///
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TableRecord"))]
pub struct MultiConditionTable {
    bins: Vec<Bin>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TableRecord {
    bins: Vec<Bin>,
}

#[cfg(feature = "serde")]
impl TryFrom<TableRecord> for MultiConditionTable {
    type Error = CoreError;

    fn try_from(record: TableRecord) -> Result<Self> {
        MultiConditionTable::new(record.bins)
    }
}

pub struct MultiConditionTableIterator<'a> {
    table: &'a MultiConditionTable,
    index: usize,
}

impl MultiConditionTable {
    ///
    /// Create a table from already assembled bins.
    ///
    /// # Arguments
    /// - bins: bins in output order; keys must be unique
    ///
    pub fn new(bins: Vec<Bin>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(bins.len());
        for bin in &bins {
            if !seen.insert(bin.key()) {
                return Err(CoreError::DuplicateBin(bin.key().to_string()));
            }
        }

        Ok(MultiConditionTable { bins })
    }

    ///
    /// Group raw condition rows into bins.
    ///
    /// Rows of a bin are ordered by their declared condition and re-indexed
    /// positionally, so declared indices `[0, 2, 5]` become `0..3`. The
    /// coordinates of a bin are taken from its first condition.
    ///
    /// # Arguments
    /// - rows: condition rows, in any order
    ///
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = ConditionRow>,
    {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<ConditionRow>> = HashMap::new();

        for row in rows {
            match groups.get_mut(&row.bin) {
                Some(group) => group.push(row),
                None => {
                    order.push(row.bin.clone());
                    groups.insert(row.bin.clone(), vec![row]);
                }
            }
        }

        let mut bins = Vec::with_capacity(order.len());
        for key in order {
            let mut group = groups.remove(&key).unwrap_or_default();

            // stable: rows declaring the same condition keep input order
            group.sort_by_key(|row| row.condition);
            if let Some(pair) = group.windows(2).find(|w| w[0].condition == w[1].condition) {
                return Err(CoreError::DuplicateCondition {
                    key,
                    condition: pair[0].condition,
                });
            }

            let Some(first) = group.first() else {
                return Err(CoreError::EmptyBin(key));
            };
            let (chrom, start, end) = (first.chrom.clone(), first.start, first.end);

            let conditions: Vec<ConditionStats> = group.iter().map(|row| row.stats).collect();
            bins.push(Bin::new(key, chrom, start, end, conditions)?);
        }

        Ok(MultiConditionTable { bins })
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn iter(&self) -> MultiConditionTableIterator<'_> {
        self.into_iter()
    }

    ///
    /// Look up a bin by key
    ///
    pub fn get(&self, key: &str) -> Option<&Bin> {
        self.bins.iter().find(|bin| bin.key() == key)
    }

    ///
    /// Largest number of conditions over all bins.
    ///
    pub fn n_conditions(&self) -> usize {
        self.bins.iter().map(Bin::n_conditions).max().unwrap_or(0)
    }

    ///
    /// Iterate unique chromosomes, in order of first appearance
    ///
    pub fn iter_chroms(&self) -> impl Iterator<Item = &str> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.bins
            .iter()
            .map(Bin::chrom)
            .filter(move |chrom| seen.insert(*chrom))
    }
}

impl TryFrom<Vec<ConditionRow>> for MultiConditionTable {
    type Error = CoreError;

    fn try_from(rows: Vec<ConditionRow>) -> Result<Self> {
        MultiConditionTable::from_rows(rows)
    }
}

impl TryFrom<Vec<Bin>> for MultiConditionTable {
    type Error = CoreError;

    fn try_from(bins: Vec<Bin>) -> Result<Self> {
        MultiConditionTable::new(bins)
    }
}

impl<'a> Iterator for MultiConditionTableIterator<'a> {
    type Item = &'a Bin;

    fn next(&mut self) -> Option<Self::Item> {
        let bin = self.table.bins.get(self.index)?;
        self.index += 1;
        Some(bin)
    }
}

impl<'a> IntoIterator for &'a MultiConditionTable {
    type Item = &'a Bin;
    type IntoIter = MultiConditionTableIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        MultiConditionTableIterator {
            table: self,
            index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn row(bin: &str, chrom: &str, condition: usize, sum: f64) -> ConditionRow {
        ConditionRow::new(
            bin,
            chrom,
            0,
            1000,
            condition,
            ConditionStats::new(sum, 1.0, 100.0, 1.0, 1.0),
        )
    }

    #[fixture]
    fn rows() -> Vec<ConditionRow> {
        vec![
            row("b2", "chr2", 0, 1.0),
            row("b1", "chr1", 1, 20.0),
            row("b1", "chr1", 0, 10.0),
            row("b2", "chr2", 1, 2.0),
            row("b1", "chr1", 2, 30.0),
        ]
    }

    #[rstest]
    fn test_from_rows_groups_by_first_appearance(rows: Vec<ConditionRow>) {
        let table = MultiConditionTable::from_rows(rows).unwrap();

        let keys: Vec<&str> = table.iter().map(Bin::key).collect();
        assert_eq!(keys, vec!["b2", "b1"]);
        assert_eq!(table.n_conditions(), 3);
    }

    #[rstest]
    fn test_from_rows_orders_conditions(rows: Vec<ConditionRow>) {
        let table = MultiConditionTable::from_rows(rows).unwrap();
        let sums: Vec<f64> = table
            .get("b1")
            .unwrap()
            .conditions()
            .iter()
            .map(|s| s.sum)
            .collect();

        assert_eq!(sums, vec![10.0, 20.0, 30.0]);
    }

    #[rstest]
    fn test_from_rows_collapses_gaps() {
        let rows = vec![row("b1", "chr1", 5, 3.0), row("b1", "chr1", 0, 1.0), row("b1", "chr1", 2, 2.0)];
        let table = MultiConditionTable::from_rows(rows).unwrap();
        let bin = table.get("b1").unwrap();

        assert_eq!(bin.n_conditions(), 3);
        assert_eq!(bin.condition(2).map(|s| s.sum), Some(3.0));
    }

    #[rstest]
    fn test_from_rows_duplicate_condition() {
        let rows = vec![row("b1", "chr1", 0, 1.0), row("b1", "chr1", 0, 2.0)];
        let result = MultiConditionTable::from_rows(rows);

        assert_eq!(
            result,
            Err(CoreError::DuplicateCondition {
                key: "b1".to_string(),
                condition: 0
            })
        );
    }

    #[rstest]
    fn test_coordinates_from_first_condition() {
        let mut second = row("b1", "chr1", 1, 2.0);
        second.start = 500;
        second.end = 600;
        let mut first = row("b1", "chr9", 0, 1.0);
        first.end = 100;

        let table = MultiConditionTable::from_rows(vec![second, first]).unwrap();
        let bin = table.get("b1").unwrap();
        assert_eq!(bin.chrom(), "chr9");
        assert_eq!((bin.start(), bin.end()), (0, 100));
    }

    #[rstest]
    fn test_new_rejects_duplicate_keys() {
        let stats = vec![ConditionStats::default()];
        let bins = vec![
            Bin::new("b1", "chr1", 0, 10, stats.clone()).unwrap(),
            Bin::new("b1", "chr1", 10, 20, stats).unwrap(),
        ];

        assert_eq!(
            MultiConditionTable::new(bins),
            Err(CoreError::DuplicateBin("b1".to_string()))
        );
    }

    #[rstest]
    fn test_iter_chroms(rows: Vec<ConditionRow>) {
        let table = MultiConditionTable::try_from(rows).unwrap();
        let chroms: Vec<&str> = table.iter_chroms().collect();
        assert_eq!(chroms, vec!["chr2", "chr1"]);
    }

    #[rstest]
    fn test_empty_table() {
        let table = MultiConditionTable::from_rows(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.n_conditions(), 0);
    }
}
