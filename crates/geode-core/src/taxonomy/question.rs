//! The question model: verbatim text plus diagnostic metadata.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ids::{BlockId, PotentialId, QuestionId};

/// Diagnostic purpose a question can serve. Selection filters on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    /// Open evidence gathering for unexplored potentials.
    Clarification,
    /// Confirming an already-evidenced potential from another angle.
    Validation,
    /// Checking declared answers against reported behavior.
    ContradictionCheck,
    /// Probing for distortion between declared and lived energy.
    ShiftDetection,
    /// Contrasting declared energy against actual felt energy; resolves
    /// shift flags.
    Contrast,
    /// Early-life evidence; carries the highest diagnostic weight and
    /// resolves shift flags.
    Childhood,
}

impl Purpose {
    /// All purposes in declaration order.
    pub const ALL: [Purpose; 6] = [
        Self::Clarification,
        Self::Validation,
        Self::ContradictionCheck,
        Self::ShiftDetection,
        Self::Contrast,
        Self::Childhood,
    ];

    /// Whether a signal from a question with this purpose can resolve a
    /// shift flag.
    pub fn resolves_shifts(&self) -> bool {
        matches!(self, Self::Contrast | Self::Childhood)
    }
}

/// How the presentation layer should collect the answer.
///
/// Pass-through metadata for the UI; never consulted by selection or
/// evidence bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    #[default]
    FreeText,
    SingleChoice,
    MultiChoice,
}

/// An immutable question from the reference bank.
///
/// The text is verbatim and is never altered or regenerated by the
/// engine; presentation repeats it exactly as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub block: BlockId,
    /// Position within the block; (block, index) is unique bank-wide.
    pub index: u32,
    pub text: String,
    pub purposes: SmallVec<[Purpose; 4]>,
    /// Potentials this question can produce evidence for.
    pub potentials: SmallVec<[PotentialId; 4]>,
    #[serde(default)]
    pub kind: ResponseKind,
    /// Fixed options for choice questions; empty for free text.
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    pub fn has_purpose(&self, purpose: Purpose) -> bool {
        self.purposes.contains(&purpose)
    }

    /// Whether a signal from this question can resolve a shift flag.
    pub fn resolves_shifts(&self) -> bool {
        self.purposes.iter().any(Purpose::resolves_shifts)
    }

    pub fn evidences(&self, potential: &PotentialId) -> bool {
        self.potentials.contains(potential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn question(purposes: SmallVec<[Purpose; 4]>) -> Question {
        Question {
            id: QuestionId::new("b.1"),
            block: BlockId::new("B"),
            index: 1,
            text: "What comes easily to you?".to_string(),
            purposes,
            potentials: smallvec![PotentialId::new("citrine")],
            kind: ResponseKind::FreeText,
            options: Vec::new(),
        }
    }

    #[test]
    fn contrast_and_childhood_resolve_shifts() {
        assert!(question(smallvec![Purpose::Contrast]).resolves_shifts());
        assert!(question(smallvec![Purpose::Childhood]).resolves_shifts());
        assert!(!question(smallvec![Purpose::Clarification]).resolves_shifts());
    }

    #[test]
    fn evidences_checks_potential_set() {
        let q = question(smallvec![Purpose::Clarification]);
        assert!(q.evidences(&PotentialId::new("citrine")));
        assert!(!q.evidences(&PotentialId::new("amber")));
    }
}
