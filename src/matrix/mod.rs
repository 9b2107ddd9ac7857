//! Matrix module: grids, distance tables and labeled distance tables.

pub mod grid;
pub mod distance;
pub mod labels;
pub mod labeled;

pub use grid::Grid;
pub use distance::{DistanceTable, DEFAULT_ZERO};
pub use labels::LabelPair;
pub use labeled::LabeledDistanceTable;
