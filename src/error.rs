//! Error types shared by every table in the crate.

use thiserror::Error;

/// Errors raised by grid construction, cell access and readiness checks.
///
/// Incomplete data is never an error on its own: [`is_ready`] style queries
/// report it as `false`. Only structurally invalid operations fail.
///
/// [`is_ready`]: crate::matrix::Grid::is_ready
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A 2-D source was ragged, or a serialized table disagreed with its own size.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A coordinate fell outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside a {width}x{height} grid")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A label is not part of the table's label set.
    #[error("unknown label `{0}`")]
    UnknownLabel(String),

    /// A cost was requested with [`MissingCost::Reject`] and the cell is unset.
    ///
    /// [`MissingCost::Reject`]: crate::oracle::MissingCost::Reject
    #[error("no cost recorded from {from} to {to}")]
    MissingCost { from: String, to: String },

    /// Raised by `ensure_ready` when the table is incomplete or inconsistent.
    #[error("table is not ready: square={square}, {missing} unset cells, {unbalanced} unbalanced pairs")]
    NotReady {
        square: bool,
        missing: usize,
        unbalanced: usize,
    },
}
