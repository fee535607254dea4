//! The signal model: structured extraction from one answered question.
//!
//! A `Signal` is produced once per answer by an `AnswerInterpreter` and
//! is immutable from then on. The engine never sees raw answer text —
//! signals are the entire boundary with natural language.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{IndicatorId, PotentialId, QuestionId};

/// Kind of evidence a fragment carries.
///
/// Ordering is diagnostic weight: `Childhood > Behavioral > Declarative`.
/// What someone loved at age eight outweighs what they claim today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// The client says so.
    Declarative,
    /// The client's reported behavior shows it.
    Behavioral,
    /// Early-life evidence shows it.
    Childhood,
}

impl MarkerKind {
    /// All kinds in ascending weight order.
    pub const ALL: [MarkerKind; 3] = [Self::Declarative, Self::Behavioral, Self::Childhood];

    /// Whether this marker satisfies the non-declarative requirement for
    /// High confidence.
    pub fn is_non_declarative(&self) -> bool {
        !matches!(self, Self::Declarative)
    }
}

/// Direction of a fragment relative to its potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Supports,
    Contradicts,
}

/// One piece of evidence inside a signal: a potential, the kind of marker
/// observed, and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalFragment {
    pub potential: PotentialId,
    pub marker: MarkerKind,
    pub polarity: Polarity,
}

impl SignalFragment {
    pub fn supports(potential: impl Into<PotentialId>, marker: MarkerKind) -> Self {
        Self {
            potential: potential.into(),
            marker,
            polarity: Polarity::Supports,
        }
    }

    pub fn contradicts(potential: impl Into<PotentialId>, marker: MarkerKind) -> Self {
        Self {
            potential: potential.into(),
            marker,
            polarity: Polarity::Contradicts,
        }
    }
}

/// Structured output of interpreting one answer.
///
/// May be empty (the interpreter could not extract anything) — that is a
/// valid no-evidence turn, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// The question this signal answers.
    pub question: QuestionId,
    #[serde(default)]
    pub fragments: Vec<SignalFragment>,
    /// Shift indicators the interpreter observed in the answer.
    #[serde(default)]
    pub indicators: Vec<IndicatorId>,
}

impl Signal {
    pub fn new(question: impl Into<QuestionId>) -> Self {
        Self {
            question: question.into(),
            fragments: Vec::new(),
            indicators: Vec::new(),
        }
    }

    pub fn with_fragment(mut self, fragment: SignalFragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn with_indicator(mut self, indicator: impl Into<IndicatorId>) -> Self {
        self.indicators.push(indicator.into());
        self
    }

    /// A signal with no fragments and no indicators contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.indicators.is_empty()
    }

    /// Distinct potentials touched by this signal's fragments.
    pub fn touched_potentials(&self) -> Vec<&PotentialId> {
        let mut seen: Vec<&PotentialId> = Vec::new();
        for fragment in &self.fragments {
            if !seen.contains(&&fragment.potential) {
                seen.push(&fragment.potential);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_weight_ordering() {
        assert!(MarkerKind::Declarative < MarkerKind::Behavioral);
        assert!(MarkerKind::Behavioral < MarkerKind::Childhood);
    }

    #[test]
    fn empty_signal_detection() {
        let signal = Signal::new("b.1");
        assert!(signal.is_empty());

        let signal = signal.with_fragment(SignalFragment::supports("citrine", MarkerKind::Declarative));
        assert!(!signal.is_empty());
    }

    #[test]
    fn touched_potentials_deduplicates() {
        let signal = Signal::new("b.1")
            .with_fragment(SignalFragment::supports("citrine", MarkerKind::Declarative))
            .with_fragment(SignalFragment::contradicts("citrine", MarkerKind::Behavioral))
            .with_fragment(SignalFragment::supports("garnet", MarkerKind::Behavioral));
        assert_eq!(signal.touched_potentials().len(), 2);
    }
}
