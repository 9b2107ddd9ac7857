//! Travel-distance tables.
//!
//! A [`DistanceTable`] is a [`Grid`] whose writes are mirrored by default and
//! whose main diagonal is forced to a fixed "self-distance" value by every
//! constructor. The diagonal is never taken from caller data; only a
//! deserialized table keeps the diagonal it was saved with.

use crate::error::TableError;
use crate::matrix::grid::{Grid, GridData};
use log::debug;
use serde::{Deserialize, Serialize};

/// Self-distance written on the diagonal unless another value is given
pub const DEFAULT_ZERO: i32 = 0;

/// Side length of [`DistanceTable::default`]
pub const DEFAULT_LENGTH: usize = 2;

/// Symmetric travel-cost grid with an identity diagonal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "DistanceTableData", try_from = "DistanceTableData")]
pub struct DistanceTable {
    grid: Grid,
    zero: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceTableData {
    pub values: Vec<Vec<Option<i32>>>,
    #[serde(default)]
    pub zero: i32,
    #[serde(default = "mirrored_by_default")]
    pub mirrored: bool,
}

fn mirrored_by_default() -> bool {
    true
}

impl DistanceTable {
    /// Create a `length x length` table with the diagonal set to [`DEFAULT_ZERO`].
    pub fn new(length: usize) -> Self {
        Self::with_zero(length, DEFAULT_ZERO)
    }

    /// Create a `length x length` table with the diagonal set to `zero`.
    pub fn with_zero(length: usize, zero: i32) -> Self {
        Self::wrap(Grid::new(length, length), zero)
    }

    /// Wrap a pre-populated source indexed `values[x][y]`.
    ///
    /// Whatever the source holds on the diagonal is replaced by `zero`.
    pub fn from_values(values: Vec<Vec<Option<i32>>>, zero: i32) -> Result<Self, TableError> {
        Ok(Self::wrap(Grid::from_values(values)?, zero))
    }

    fn wrap(grid: Grid, zero: i32) -> Self {
        let mut table = DistanceTable {
            grid: grid.with_mirrored(true),
            zero,
        };
        table.reset_diagonal();
        debug!(
            "distance table {}x{} created (zero = {})",
            table.width(),
            table.height(),
            zero
        );
        table
    }

    fn reset_diagonal(&mut self) {
        self.grid.fill_diagonal(Some(self.zero));
    }

    /// Reassemble a stored table as-is, diagonal included.
    pub(crate) fn from_parts(grid: Grid, zero: i32) -> Self {
        DistanceTable { grid, zero }
    }

    /// Builder-style override of the default mirroring
    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.grid.set_mirrored(mirrored);
        self
    }

    /// The configured self-distance
    pub fn zero(&self) -> i32 {
        self.zero
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_square(&self) -> bool {
        self.grid.is_square()
    }

    pub fn is_mirrored(&self) -> bool {
        self.grid.is_mirrored()
    }

    pub fn set_mirrored(&mut self, mirrored: bool) {
        self.grid.set_mirrored(mirrored);
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Option<i32>, TableError> {
        self.grid.get(x, y)
    }

    /// Write `(x, y)`, mirroring into `(y, x)` per [`Grid::set`].
    pub fn set(&mut self, x: usize, y: usize, value: Option<i32>) -> Result<(), TableError> {
        self.grid.set(x, y, value)
    }

    pub fn is_cell_ready(&self, x: usize, y: usize) -> Result<bool, TableError> {
        self.grid.is_cell_ready(x, y)
    }

    pub fn is_ready(&self) -> bool {
        self.grid.is_ready()
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl PartialEq for DistanceTable {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for DistanceTable {}

impl From<DistanceTable> for DistanceTableData {
    fn from(table: DistanceTable) -> Self {
        DistanceTableData {
            values: table.grid.values(),
            zero: table.zero,
            mirrored: table.grid.is_mirrored(),
        }
    }
}

impl TryFrom<DistanceTableData> for DistanceTable {
    type Error = TableError;

    fn try_from(data: DistanceTableData) -> Result<Self, Self::Error> {
        let grid = Grid::try_from(GridData {
            values: data.values,
            mirrored: data.mirrored,
        })?;
        Ok(DistanceTable::from_parts(grid, data.zero))
    }
}
