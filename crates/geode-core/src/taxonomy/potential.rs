//! The potential: one of 9 fixed classifications at a matrix cell.

use serde::{Deserialize, Serialize};

use super::ids::PotentialId;
use super::matrix::{Cell, Column, Row};

/// Number of potentials in a complete taxonomy.
pub const POTENTIAL_COUNT: usize = 9;

/// A single potential from the reference taxonomy.
///
/// Immutable after load. The identity and cell assignment come from
/// reference data; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potential {
    pub id: PotentialId,
    /// Human-readable display name (e.g. `"Citrine"`).
    pub name: String,
    pub cell: Cell,
}

impl Potential {
    pub fn new(id: impl Into<PotentialId>, name: impl Into<String>, row: Row, column: Column) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cell: Cell::new(row, column),
        }
    }

    pub fn row(&self) -> Row {
        self.cell.row
    }

    pub fn column(&self) -> Column {
        self.cell.column
    }
}
