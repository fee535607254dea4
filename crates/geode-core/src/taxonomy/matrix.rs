//! The 3×3 diagnostic matrix: energy rows × application columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Energy tier of a potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    /// Row 1 — activity in this potential generates energy.
    Strength,
    /// Row 2 — activity here restores energy spent elsewhere.
    Resource,
    /// Row 3 — activity here drains energy; the delegation zone.
    Weakness,
}

impl Row {
    /// All rows in matrix order.
    pub const ALL: [Row; 3] = [Self::Strength, Self::Resource, Self::Weakness];

    /// Stable label used in reports and data files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Resource => "resource",
            Self::Weakness => "weakness",
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Application sphere of a potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Material sphere: money, body, structure, tangible results.
    Material,
    /// Emotional sphere: people, expression, atmosphere.
    Emotional,
    /// Meaning/cognitive sphere: ideas, knowledge, direction.
    Meaning,
}

impl Column {
    /// All columns in matrix order.
    pub const ALL: [Column; 3] = [Self::Material, Self::Emotional, Self::Meaning];

    /// Stable label used in reports and data files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Emotional => "emotional",
            Self::Meaning => "meaning",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One cell of the matrix. Each of the 9 potentials occupies exactly one
/// cell; the loader rejects taxonomies that do not cover all cells
/// bijectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: Row,
    pub column: Column,
}

impl Cell {
    pub fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// All 9 cells in (row, column) order.
    pub fn all() -> impl Iterator<Item = Cell> {
        Row::ALL
            .into_iter()
            .flat_map(|row| Column::ALL.into_iter().map(move |column| Cell { row, column }))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.row, self.column)
    }
}
