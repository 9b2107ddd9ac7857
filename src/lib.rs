//! Travel Matrix Library
//!
//! Pairwise travel-cost tables to hand to a vehicle routing optimizer.
//!
//! # Features
//!
//! - Rectangular grids of optional costs with optional mirrored (symmetric) writes
//! - Distance tables with an identity diagonal
//! - Label-addressed distance tables with case-insensitive label deduplication
//! - Readiness checks and audits before a table is given to a solver
//! - Left-biased union merge of two independently built tables
//! - A transit-cost oracle with an explicit policy for missing entries
//!
//! # Example
//!
//! ```
//! use travel_matrix::matrix::LabeledDistanceTable;
//! use travel_matrix::oracle::{MissingCost, TransitCost};
//!
//! let mut north = LabeledDistanceTable::new(["Depot", "Mill"]);
//! north.set("Depot", "Mill", Some(12)).unwrap();
//!
//! let mut south = LabeledDistanceTable::new(["depot", "Harbor"]);
//! south.set("depot", "Harbor", Some(30)).unwrap();
//!
//! let merged = north.merge(&south).unwrap();
//! assert_eq!(merged.labels(), ["Depot", "Harbor", "Mill"]);
//! assert_eq!(merged.get("Harbor", "Depot").unwrap(), Some(30));
//!
//! // Mill <-> Harbor is known by neither side
//! assert!(!merged.is_ready());
//! assert_eq!(merged.resolve_cost("Mill", "Harbor", MissingCost::Zero).unwrap(), 0);
//! ```

pub mod error;
pub mod matrix;
pub mod oracle;
pub mod audit;

pub use error::TableError;
pub use matrix::{DistanceTable, Grid, LabeledDistanceTable};
pub use audit::ReadinessReport;
