//! Distance tables addressed by location labels.
//!
//! Rows and columns of a [`LabeledDistanceTable`] are named by labels that
//! are normalized once at construction (see [`labels::normalize`]) and never
//! change afterwards. The label at position `i` addresses coordinate `i` of
//! the underlying [`DistanceTable`].

use crate::error::TableError;
use crate::matrix::distance::{DistanceTable, DEFAULT_ZERO};
use crate::matrix::grid::{Grid, GridData};
use crate::matrix::labels::{self, LabelPair};
use log::debug;
use serde::{Deserialize, Serialize};

/// A square, symmetric distance table over named locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "LabeledTableData", try_from = "LabeledTableData")]
pub struct LabeledDistanceTable {
    table: DistanceTable,
    labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledTableData {
    pub labels: Vec<String>,
    #[serde(default)]
    pub zero: i32,
    pub values: Vec<Vec<Option<i32>>>,
    #[serde(default = "mirrored_by_default")]
    pub mirrored: bool,
}

fn mirrored_by_default() -> bool {
    true
}

impl LabeledDistanceTable {
    /// Create a table over `labels` with the diagonal set to [`DEFAULT_ZERO`].
    ///
    /// Labels are deduplicated case-insensitively and sorted, so the
    /// dimension is the number of distinct labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_zero(labels, DEFAULT_ZERO)
    }

    /// Create a table over `labels` with the diagonal set to `zero`.
    pub fn with_zero<I, S>(labels: I, zero: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels::normalize(labels);
        let table = DistanceTable::with_zero(labels.len(), zero);
        LabeledDistanceTable { table, labels }
    }

    /// Wrap pre-populated `values[x][y]` laid out in normalized label order.
    ///
    /// Fails with [`TableError::InvalidDimension`] unless `values` is a
    /// square grid whose side equals the number of distinct labels.
    pub fn from_values<I, S>(
        labels: I,
        values: Vec<Vec<Option<i32>>>,
        zero: i32,
    ) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels::normalize(labels);
        let table = DistanceTable::from_values(values, zero)?;
        if table.width() != labels.len() || table.height() != labels.len() {
            return Err(TableError::InvalidDimension(format!(
                "{} labels for a {}x{} grid",
                labels.len(),
                table.width(),
                table.height()
            )));
        }
        Ok(LabeledDistanceTable { table, labels })
    }

    /// Normalized labels in coordinate order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels, which is also the side of the table
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn zero(&self) -> i32 {
        self.table.zero()
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    pub fn grid(&self) -> &Grid {
        self.table.grid()
    }

    pub fn is_square(&self) -> bool {
        self.table.is_square()
    }

    /// Whether `label` is one of the stored labels (exact match)
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Coordinate of `label`, matched exactly against the stored labels.
    pub fn position(&self, label: &str) -> Result<usize, TableError> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| TableError::UnknownLabel(label.to_string()))
    }

    fn coordinates(&self, x: &str, y: &str) -> Result<(usize, usize), TableError> {
        Ok((self.position(x)?, self.position(y)?))
    }

    /// Cost from label `x` to label `y`.
    pub fn get(&self, x: &str, y: &str) -> Result<Option<i32>, TableError> {
        let (px, py) = self.coordinates(x, y)?;
        self.table.get(px, py)
    }

    /// Set the cost between labels `x` and `y`; the reverse direction is
    /// written too while the table is mirrored.
    pub fn set(&mut self, x: &str, y: &str, value: Option<i32>) -> Result<(), TableError> {
        let (px, py) = self.coordinates(x, y)?;
        self.table.set(px, py, value)
    }

    pub fn get_at(&self, x: usize, y: usize) -> Result<Option<i32>, TableError> {
        self.table.get(x, y)
    }

    pub fn set_at(&mut self, x: usize, y: usize, value: Option<i32>) -> Result<(), TableError> {
        self.table.set(x, y, value)
    }

    pub fn set_mirrored(&mut self, mirrored: bool) {
        self.table.set_mirrored(mirrored);
    }

    /// True unless either direction between `x` and `y` is unset.
    pub fn is_pair_ready(&self, x: &str, y: &str) -> Result<bool, TableError> {
        let (px, py) = self.coordinates(x, y)?;
        Ok(self.table.is_cell_ready(px, py)? && self.table.is_cell_ready(py, px)?)
    }

    /// A diagonal pair is balanced when it holds the configured zero; any
    /// other pair when both of its directions hold the same value.
    pub fn is_balanced(&self, pair: &LabelPair) -> Result<bool, TableError> {
        let (px, py) = self.coordinates(pair.first(), pair.second())?;
        if pair.is_diagonal() {
            return Ok(self.table.get(px, px)? == Some(self.zero()));
        }
        Ok(self.table.get(px, py)? == self.table.get(py, px)?)
    }

    /// Distinct unordered label pairs whose cells disagree
    pub fn unbalanced_pairs(&self) -> Vec<LabelPair> {
        labels::distinct_pairs(&self.labels)
            .into_iter()
            .filter(|pair| !matches!(self.is_balanced(pair), Ok(true)))
            .collect()
    }

    /// Ready when square, every cell is set and every label pair is balanced.
    pub fn is_ready(&self) -> bool {
        self.is_square()
            && self.table.is_ready()
            && labels::distinct_pairs(&self.labels)
                .iter()
                .all(|pair| matches!(self.is_balanced(pair), Ok(true)))
    }

    /// Value `table` holds for `pair`, or `None` when it does not know both
    /// labels. Labels are resolved ignoring case.
    fn value_from(table: &Self, pair: &LabelPair) -> Result<Option<i32>, TableError> {
        let x = labels::position_ignore_case(&table.labels, pair.first());
        let y = labels::position_ignore_case(&table.labels, pair.second());
        match (x, y) {
            (Some(x), Some(y)) => table.get_at(x, y),
            _ => Ok(None),
        }
    }

    /// Union-merge two tables into a new one.
    ///
    /// The result covers the case-insensitive union of both label sets and
    /// keeps `self`'s zero. For every distinct label pair, `self`'s value is
    /// used when `self` defines it; otherwise `other`'s value fills the gap.
    /// Pairs whose endpoints no single table knows stay unset. Neither input
    /// is modified.
    pub fn merge(&self, other: &Self) -> Result<Self, TableError> {
        let mut merged = Self::with_zero(
            self.labels.iter().chain(other.labels.iter()).cloned(),
            self.zero(),
        );

        let mut from_left = 0usize;
        let mut from_right = 0usize;
        for pair in labels::distinct_pairs(&merged.labels) {
            let value = match Self::value_from(self, &pair)? {
                Some(value) => {
                    from_left += 1;
                    Some(value)
                }
                None => {
                    let value = Self::value_from(other, &pair)?;
                    if value.is_some() {
                        from_right += 1;
                    }
                    value
                }
            };
            merged.set(pair.first(), pair.second(), value)?;
        }

        debug!(
            "merged {} + {} labels into {} ({} pairs from left, {} from right)",
            self.len(),
            other.len(),
            merged.len(),
            from_left,
            from_right
        );
        Ok(merged)
    }
}

impl PartialEq for LabeledDistanceTable {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.labels == other.labels
    }
}

impl Eq for LabeledDistanceTable {}

impl From<LabeledDistanceTable> for LabeledTableData {
    fn from(table: LabeledDistanceTable) -> Self {
        LabeledTableData {
            zero: table.zero(),
            values: table.grid().values(),
            mirrored: table.table.is_mirrored(),
            labels: table.labels,
        }
    }
}

impl TryFrom<LabeledTableData> for LabeledDistanceTable {
    type Error = TableError;

    /// Restores the stored cells untouched, diagonal included.
    fn try_from(data: LabeledTableData) -> Result<Self, Self::Error> {
        if labels::normalize(data.labels.iter().cloned()) != data.labels {
            return Err(TableError::InvalidDimension(
                "labels must be distinct, non-empty and sorted".to_string(),
            ));
        }
        let grid = Grid::try_from(GridData {
            values: data.values,
            mirrored: data.mirrored,
        })?;
        let side = data.labels.len();
        if grid.width() != side || grid.height() != side {
            return Err(TableError::InvalidDimension(format!(
                "{} labels for a {}x{} grid",
                side,
                grid.width(),
                grid.height()
            )));
        }
        Ok(LabeledDistanceTable {
            table: DistanceTable::from_parts(grid, data.zero),
            labels: data.labels,
        })
    }
}
