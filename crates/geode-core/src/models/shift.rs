//! Shift resolution outcomes.

use serde::{Deserialize, Serialize};

/// Outcome of resolving a shift flag via a contrast- or childhood-purpose
/// signal.
///
/// A flag is only ever annotated with an outcome — the indicator history
/// that raised it is never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftResolution {
    /// The apparent distortion was explained; the energy is natural.
    /// Flag cleared, confidence unaffected.
    ConfirmedNatural,
    /// The behavior is compensation, not natural energy. Flag remains;
    /// the potential's effective row is reclassified toward the
    /// delegation zone (Weakness).
    Compensatory,
    /// Declared strength masking a drain. Flag remains; confidence is
    /// capped at Low.
    MaskedWeakness,
}

impl ShiftResolution {
    /// Whether the flag stays visible in reports after this resolution.
    pub fn flag_remains(&self) -> bool {
        !matches!(self, Self::ConfirmedNatural)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ConfirmedNatural => "confirmed_natural",
            Self::Compensatory => "compensatory",
            Self::MaskedWeakness => "masked_weakness",
        }
    }
}
