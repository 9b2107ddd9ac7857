//! Rectangular grid of optional integer cells.
//!
//! The grid is the storage layer for every table in the crate. Cells are
//! addressed as `(x, y)` with `x` in `[0, width)` and `y` in `[0, height)`,
//! and each cell is either unset (`None`) or holds a cost.
//!
//! A grid may be *mirrored*: on a square mirrored grid, writing `(x, y)` with
//! `x != y` also writes `(y, x)` before `set` returns. On a non-square grid
//! the mirror flag is kept but has no effect.

use crate::error::TableError;
use log::debug;
use serde::{Deserialize, Serialize};

/// A `width x height` table of optional costs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "GridData", try_from = "GridData")]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major over x: cell `(x, y)` lives at `x * height + y`
    cells: Vec<Option<i32>>,
    mirrored: bool,
}

/// Serialized form of a [`Grid`], validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridData {
    pub values: Vec<Vec<Option<i32>>>,
    #[serde(default)]
    pub mirrored: bool,
}

impl Grid {
    /// Create a grid with every cell unset and mirroring disabled.
    ///
    /// # Panics
    /// Panics if `width * height` overflows `usize`. Use [`Grid::try_new`]
    /// for sizes that come from untrusted input.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a grid with every cell unset, failing with
    /// [`TableError::InvalidDimension`] when the cell count overflows.
    pub fn try_new(width: usize, height: usize) -> Result<Self, TableError> {
        let len = width.checked_mul(height).ok_or_else(|| {
            TableError::InvalidDimension(format!("{}x{} cells overflow usize", width, height))
        })?;
        Ok(Grid {
            width,
            height,
            cells: vec![None; len],
            mirrored: false,
        })
    }

    /// Build a grid from a 2-D source indexed `values[x][y]`.
    ///
    /// The width is the number of outer rows and the height the length of
    /// each inner row. All inner rows must have the same length.
    pub fn from_values(values: Vec<Vec<Option<i32>>>) -> Result<Self, TableError> {
        let width = values.len();
        let height = values.first().map_or(0, Vec::len);

        if let Some((x, row)) = values.iter().enumerate().find(|(_, row)| row.len() != height) {
            return Err(TableError::InvalidDimension(format!(
                "row {} has {} cells, expected {}",
                x,
                row.len(),
                height
            )));
        }

        let cells: Vec<Option<i32>> = values.into_iter().flatten().collect();
        Ok(Grid {
            width,
            height,
            cells,
            mirrored: false,
        })
    }

    /// Builder-style toggle for mirrored writes
    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether writes are requested to propagate to the transposed cell.
    ///
    /// Propagation only happens when the grid is also square.
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, TableError> {
        if x >= self.width || y >= self.height {
            return Err(TableError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x * self.height + y)
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Option<i32>, TableError> {
        let offset = self.offset(x, y)?;
        Ok(self.cells[offset])
    }

    /// Write the cell at `(x, y)`.
    ///
    /// When the grid is mirrored and square and `x != y`, the same value is
    /// written to `(y, x)` as part of this call. Passing `None` clears the
    /// cell (and its mirror).
    pub fn set(&mut self, x: usize, y: usize, value: Option<i32>) -> Result<(), TableError> {
        let offset = self.offset(x, y)?;
        self.cells[offset] = value;

        if self.mirrored && x != y {
            if self.is_square() {
                let mirror = self.offset(y, x)?;
                self.cells[mirror] = value;
            } else {
                debug!(
                    "mirrored write to ({}, {}) ignored on {}x{} grid",
                    x, y, self.width, self.height
                );
            }
        }
        Ok(())
    }

    /// Write `value` into every `(i, i)` cell. Diagonal writes never mirror.
    pub(crate) fn fill_diagonal(&mut self, value: Option<i32>) {
        let stride = self.height + 1;
        let length = self.width.min(self.height);
        for cell in self.cells.iter_mut().step_by(stride).take(length) {
            *cell = value;
        }
    }

    /// A single cell is ready when it holds a value.
    pub fn is_cell_ready(&self, x: usize, y: usize) -> Result<bool, TableError> {
        Ok(self.get(x, y)?.is_some())
    }

    /// True when no cell is unset. Stops at the first unset cell.
    pub fn is_ready(&self) -> bool {
        !self.cells.iter().any(Option::is_none)
    }

    /// All coordinates in row-major order over `[0, width) x [0, height)`
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y)))
    }

    /// Coordinates of every unset cell, in row-major order
    pub fn missing_cells(&self) -> Vec<(usize, usize)> {
        self.coordinates()
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.is_none())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells holding a value
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Copy the cells out as `values[x][y]`.
    pub fn values(&self) -> Vec<Vec<Option<i32>>> {
        if self.height == 0 {
            return vec![Vec::new(); self.width];
        }
        self.cells.chunks(self.height).map(<[Option<i32>]>::to_vec).collect()
    }
}

impl PartialEq for Grid {
    /// Structural equality over dimensions and cells. The mirror flag is
    /// not compared. Grids with a zero dimension are equal when their sizes match.
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.width != other.width || self.height != other.height {
            return false;
        }
        if self.width == 0 || self.height == 0 {
            return true;
        }
        self.cells.iter().zip(other.cells.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for Grid {}

impl From<Grid> for GridData {
    fn from(grid: Grid) -> Self {
        GridData {
            values: grid.values(),
            mirrored: grid.mirrored,
        }
    }
}

impl TryFrom<GridData> for Grid {
    type Error = TableError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        Ok(Grid::from_values(data.values)?.with_mirrored(data.mirrored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unset() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(!grid.is_square());
        assert!(!grid.is_mirrored());
        assert_eq!(grid.populated(), 0);
        assert_eq!(grid.get(2, 1), Ok(None));
        assert!(!grid.is_ready());
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, Some(4)).unwrap();
        assert_eq!(grid.get(1, 2), Ok(Some(4)));
        assert!(grid.is_cell_ready(1, 2).unwrap());
        assert!(!grid.is_cell_ready(0, 0).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        let mut grid = Grid::new(2, 3);
        assert_eq!(
            grid.get(2, 0),
            Err(TableError::IndexOutOfRange { x: 2, y: 0, width: 2, height: 3 })
        );
        assert!(grid.set(0, 3, Some(1)).is_err());
        assert!(grid.is_cell_ready(5, 5).is_err());
    }

    #[test]
    fn test_unmirrored_write_stays_put() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 1, Some(7)).unwrap();
        assert_eq!(grid.get(1, 0), Ok(None));
    }

    #[test]
    fn test_mirrored_write_on_square_grid() {
        let mut grid = Grid::new(3, 3).with_mirrored(true);
        grid.set(0, 2, Some(9)).unwrap();
        assert_eq!(grid.get(0, 2), Ok(Some(9)));
        assert_eq!(grid.get(2, 0), Ok(Some(9)));

        grid.set(2, 0, None).unwrap();
        assert_eq!(grid.get(0, 2), Ok(None));
    }

    #[test]
    fn test_mirrored_write_ignored_when_not_square() {
        let mut grid = Grid::new(3, 2).with_mirrored(true);
        grid.set(0, 1, Some(5)).unwrap();
        assert_eq!(grid.get(0, 1), Ok(Some(5)));
        assert_eq!(grid.get(1, 0), Ok(None));
        assert!(grid.is_mirrored());
    }

    #[test]
    fn test_from_values() {
        let grid = Grid::from_values(vec![vec![Some(1), None], vec![Some(3), Some(4)]]).unwrap();
        assert_eq!(grid.get(0, 0), Ok(Some(1)));
        assert_eq!(grid.get(0, 1), Ok(None));
        assert_eq!(grid.get(1, 0), Ok(Some(3)));
        assert_eq!(grid.missing_cells(), vec![(0, 1)]);
        assert_eq!(grid.values(), vec![vec![Some(1), None], vec![Some(3), Some(4)]]);
    }

    #[test]
    fn test_from_ragged_values() {
        let result = Grid::from_values(vec![vec![Some(1), Some(2)], vec![Some(3)]]);
        assert!(matches!(result, Err(TableError::InvalidDimension(_))));
    }

    #[test]
    fn test_readiness() {
        let mut grid = Grid::new(2, 2);
        for (x, y) in grid.coordinates().collect::<Vec<_>>() {
            assert!(!grid.is_ready());
            grid.set(x, y, Some(1)).unwrap();
        }
        assert!(grid.is_ready());
    }

    #[test]
    fn test_coordinates_row_major() {
        let grid = Grid::new(2, 2);
        let coords: Vec<_> = grid.coordinates().collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_equality() {
        let mut a = Grid::new(2, 2);
        let mut b = Grid::new(2, 2).with_mirrored(true);
        assert_eq!(a, b);

        a.set(0, 1, Some(3)).unwrap();
        assert_ne!(a, b);
        b.set(0, 1, Some(3)).unwrap();
        // b mirrored the write into (1, 0)
        assert_ne!(a, b);
        a.set(1, 0, Some(3)).unwrap();
        assert_eq!(a, b);

        assert_ne!(Grid::new(2, 3), Grid::new(3, 2));
        assert_eq!(Grid::new(0, 4), Grid::new(0, 4));
        assert_ne!(Grid::new(0, 4), Grid::new(0, 3));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Grid::new(2, 2);
        original.set(0, 0, Some(1)).unwrap();
        let mut copy = original.clone();
        copy.set(0, 0, Some(999)).unwrap();
        assert_eq!(original.get(0, 0), Ok(Some(1)));
        assert_eq!(copy.get(0, 0), Ok(Some(999)));
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let mut grid = Grid::new(2, 2).with_mirrored(true);
        grid.set(0, 1, Some(6)).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(back.is_mirrored());

        let ragged = r#"{"values":[[1,2],[3]],"mirrored":false}"#;
        assert!(serde_json::from_str::<Grid>(ragged).is_err());
    }

    #[test]
    fn test_try_new_rejects_overflow() {
        assert!(matches!(Grid::try_new(usize::MAX, 2), Err(TableError::InvalidDimension(_))));
        assert_eq!(Grid::try_new(3, 4).unwrap(), Grid::new(3, 4));
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_overflow() {
        let _ = Grid::new(usize::MAX, usize::MAX);
    }

    #[test]
    fn test_fill_diagonal() {
        let mut grid = Grid::new(3, 2).with_mirrored(true);
        grid.fill_diagonal(Some(7));
        assert_eq!(grid.missing_cells(), vec![(0, 1), (1, 0), (2, 0), (2, 1)]);
        assert_eq!(grid.get(0, 0), Ok(Some(7)));
        assert_eq!(grid.get(1, 1), Ok(Some(7)));

        let mut square = Grid::new(3, 3);
        square.fill_diagonal(Some(0));
        assert_eq!(square.populated(), 3);
        assert_eq!(square.get(2, 2), Ok(Some(0)));
    }
}
