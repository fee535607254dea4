//! Shift indicators: named markers of distortion between declared and
//! lived energy.

use serde::{Deserialize, Serialize};

use super::ids::IndicatorId;

/// A shift indicator definition from the reference taxonomy.
///
/// The canonical set covers obligation language, pride without energy,
/// exhaustion after success, pleasure rejection, and moral justification
/// of suffering; the exact set is reference data, not code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftIndicator {
    pub id: IndicatorId,
    pub description: String,
    /// Signal tags associated with this indicator, for interpreters that
    /// map answer phrasing onto indicators.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ShiftIndicator {
    pub fn new(id: impl Into<IndicatorId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }
}
