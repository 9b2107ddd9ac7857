//! Transit-cost oracle consumed by route optimizers.
//!
//! Tables store `Option<i32>`. An optimizer needs plain integers, so the
//! caller decides what an unset cell means through [`MissingCost`]; nothing
//! here picks a default silently.

use crate::error::TableError;
use crate::matrix::{DistanceTable, Grid, LabeledDistanceTable};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What an unset cell becomes when a plain cost is required
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MissingCost {
    /// Treat the missing entry as free travel
    Zero,
    /// Fail with [`TableError::MissingCost`]
    Reject,
}

/// Pairwise cost lookup keyed by `K` (coordinates or labels).
pub trait TransitCost<K: ?Sized + Display> {
    /// Raw cost from `from` to `to`; `None` when the cell is unset.
    fn transit_cost(&self, from: &K, to: &K) -> Result<Option<i32>, TableError>;

    /// Cost coerced to a plain integer according to `policy`.
    fn resolve_cost(&self, from: &K, to: &K, policy: MissingCost) -> Result<i32, TableError> {
        match (self.transit_cost(from, to)?, policy) {
            (Some(cost), _) => Ok(cost),
            (None, MissingCost::Zero) => Ok(0),
            (None, MissingCost::Reject) => Err(TableError::MissingCost {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}

impl TransitCost<usize> for Grid {
    fn transit_cost(&self, from: &usize, to: &usize) -> Result<Option<i32>, TableError> {
        self.get(*from, *to)
    }
}

impl TransitCost<usize> for DistanceTable {
    fn transit_cost(&self, from: &usize, to: &usize) -> Result<Option<i32>, TableError> {
        self.get(*from, *to)
    }
}

impl TransitCost<usize> for LabeledDistanceTable {
    fn transit_cost(&self, from: &usize, to: &usize) -> Result<Option<i32>, TableError> {
        self.get_at(*from, *to)
    }
}

impl TransitCost<str> for LabeledDistanceTable {
    fn transit_cost(&self, from: &str, to: &str) -> Result<Option<i32>, TableError> {
        self.get(from, to)
    }
}

impl Grid {
    /// Dense `matrix[x][y]` export for an external optimizer.
    pub fn cost_matrix(&self, policy: MissingCost) -> Result<Vec<Vec<i32>>, TableError> {
        (0..self.width())
            .map(|x| {
                (0..self.height())
                    .map(|y| self.resolve_cost(&x, &y, policy))
                    .collect::<Result<Vec<i32>, TableError>>()
            })
            .collect()
    }
}
