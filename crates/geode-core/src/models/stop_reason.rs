//! Session termination reasons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a session terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The Strength-row potentials are all at High confidence with no
    /// unresolved shift flag among them.
    Confident,
    /// The configured question ceiling was reached.
    MaxQuestions,
    /// No eligible question remains. Distinct from `Confident`: the
    /// diagnosis is incomplete and downstream reporting must say so.
    Exhausted,
}

impl StopReason {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Confident => "confident",
            Self::MaxQuestions => "max_questions",
            Self::Exhausted => "exhausted",
        }
    }

    /// Whether the diagnosis completed with full confidence.
    pub fn is_confident(&self) -> bool {
        matches!(self, Self::Confident)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
