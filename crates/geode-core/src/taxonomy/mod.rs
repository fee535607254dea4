//! The diagnostic taxonomy: the 3×3 matrix, potentials, questions, and
//! shift indicators.
//!
//! Everything here is immutable reference data. Potentials and questions
//! are defined externally and loaded once at startup; the engine never
//! invents, rewrites, or regenerates any of it.

pub mod ids;
pub mod indicator;
pub mod matrix;
pub mod potential;
pub mod question;

pub use ids::{BlockId, IndicatorId, PotentialId, QuestionId};
pub use indicator::ShiftIndicator;
pub use matrix::{Cell, Column, Row};
pub use potential::{Potential, POTENTIAL_COUNT};
pub use question::{Purpose, Question, ResponseKind};
