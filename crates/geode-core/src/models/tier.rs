//! Confidence tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How well-evidenced a potential is.
///
/// Always derived from ledger contents — never stored independently, so
/// it cannot drift out of sync with the evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Declarative-only or internally contradictory evidence.
    Low,
    /// Partial or indirect confirmation.
    Medium,
    /// ≥2 distinct contexts, ≥1 non-declarative marker, no unresolved
    /// contradiction.
    High,
}

impl Tier {
    /// One step down, with `Low` as the floor. Used for the unresolved
    /// shift-flag discount.
    pub fn downgraded(self) -> Tier {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
