//! Readiness auditing for labeled distance tables.
//!
//! [`LabeledDistanceTable::is_ready`] only answers yes or no. The report
//! produced here lists what is missing or inconsistent, with a few summary
//! figures about the costs already entered.

use crate::error::TableError;
use crate::matrix::{LabelPair, LabeledDistanceTable};
use serde::{Deserialize, Serialize};

/// Detailed readiness state of a labeled table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub dimension: usize,
    pub square: bool,
    pub total_cells: usize,
    pub populated_cells: usize,
    /// Unset cells as `(from, to)` labels
    pub missing: Vec<(String, String)>,
    /// Label pairs whose cells disagree (or a diagonal off the zero value)
    pub unbalanced: Vec<(String, String)>,
    /// Smallest off-diagonal cost entered
    pub min_cost: Option<i32>,
    /// Largest off-diagonal cost entered
    pub max_cost: Option<i32>,
    /// Mean off-diagonal cost entered
    pub mean_cost: Option<f64>,
}

impl ReadinessReport {
    /// Same verdict as [`LabeledDistanceTable::is_ready`]
    pub fn is_ready(&self) -> bool {
        self.square && self.missing.is_empty() && self.unbalanced.is_empty()
    }
}

fn pair_labels(pair: &LabelPair) -> (String, String) {
    (pair.first().to_string(), pair.second().to_string())
}

impl LabeledDistanceTable {
    /// Inspect every cell and label pair.
    pub fn audit(&self) -> ReadinessReport {
        let grid = self.grid();
        let labels = self.labels();

        let missing = grid
            .missing_cells()
            .into_iter()
            .filter_map(|(x, y)| Some((labels.get(x)?.clone(), labels.get(y)?.clone())))
            .collect();

        let costs: Vec<i32> = grid
            .coordinates()
            .filter(|(x, y)| x != y)
            .filter_map(|(x, y)| grid.get(x, y).ok().flatten())
            .collect();
        let mean_cost = if costs.is_empty() {
            None
        } else {
            Some(costs.iter().map(|&c| c as f64).sum::<f64>() / costs.len() as f64)
        };

        ReadinessReport {
            dimension: self.len(),
            square: self.is_square(),
            total_cells: grid.width() * grid.height(),
            populated_cells: grid.populated(),
            missing,
            unbalanced: self.unbalanced_pairs().iter().map(pair_labels).collect(),
            min_cost: costs.iter().copied().min(),
            max_cost: costs.iter().copied().max(),
            mean_cost,
        }
    }

    /// Fail with [`TableError::NotReady`] unless the table is ready.
    pub fn ensure_ready(&self) -> Result<(), TableError> {
        let report = self.audit();
        if report.is_ready() {
            return Ok(());
        }
        Err(TableError::NotReady {
            square: report.square,
            missing: report.missing.len(),
            unbalanced: report.unbalanced.len(),
        })
    }
}

impl std::fmt::Display for ReadinessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Table: {} locations", self.dimension)?;
        writeln!(f, "  Square: {}", self.square)?;
        writeln!(f, "  Populated cells: {}/{}", self.populated_cells, self.total_cells)?;
        writeln!(f, "  Missing cells: {}", self.missing.len())?;
        writeln!(f, "  Unbalanced pairs: {}", self.unbalanced.len())?;
        match (self.min_cost, self.max_cost, self.mean_cost) {
            (Some(min), Some(max), Some(mean)) => {
                writeln!(f, "  Costs: min {} / max {} / avg {:.2}", min, max, mean)?;
            }
            _ => writeln!(f, "  Costs: none entered")?,
        }
        write!(f, "  Ready: {}", self.is_ready())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_incomplete_table() {
        let mut table = LabeledDistanceTable::new(["A", "B", "C"]);
        table.set("A", "B", Some(4)).unwrap();

        let report = table.audit();
        assert_eq!(report.dimension, 3);
        assert_eq!(report.total_cells, 9);
        assert_eq!(report.populated_cells, 5);
        assert_eq!(report.missing.len(), 4);
        assert!(report.missing.contains(&("A".to_string(), "C".to_string())));
        assert!(report.unbalanced.is_empty());
        assert_eq!(report.min_cost, Some(4));
        assert_eq!(report.max_cost, Some(4));
        assert!(!report.is_ready());
        assert_eq!(
            table.ensure_ready(),
            Err(TableError::NotReady { square: true, missing: 4, unbalanced: 0 })
        );
    }

    #[test]
    fn test_audit_ready_table() {
        let mut table = LabeledDistanceTable::new(["A", "B", "C"]);
        table.set("A", "B", Some(2)).unwrap();
        table.set("A", "C", Some(4)).unwrap();
        table.set("B", "C", Some(6)).unwrap();

        let report = table.audit();
        assert!(report.is_ready());
        assert_eq!(report.is_ready(), table.is_ready());
        assert_eq!(report.mean_cost, Some(4.0));
        assert!(table.ensure_ready().is_ok());
        assert!(report.to_string().contains("Ready: true"));
    }

    #[test]
    fn test_audit_reports_unbalanced_pairs() {
        let mut table = LabeledDistanceTable::new(["A", "B"]);
        table.set_mirrored(false);
        table.set("A", "B", Some(1)).unwrap();
        table.set("B", "A", Some(2)).unwrap();

        let report = table.audit();
        assert!(report.missing.is_empty());
        assert_eq!(report.unbalanced, vec![("A".to_string(), "B".to_string())]);
        assert!(!report.is_ready());
    }

    #[test]
    fn test_audit_empty_table() {
        let report = LabeledDistanceTable::new(Vec::<String>::new()).audit();
        assert!(report.is_ready());
        assert_eq!(report.mean_cost, None);
        assert!(report.to_string().contains("none entered"));
    }
}
