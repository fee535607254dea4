//! Contradiction analysis over a potential's recorded fragments.
//!
//! Two rules from the diagnostic methodology:
//!
//! 1. A later fragment negating an earlier supporting one leaves the
//!    potential internally contradictory until a shift-resolving
//!    question (contrast/childhood purpose) supports it again.
//! 2. Childhood evidence outweighs adult declarations: when childhood
//!    evidence contradicts declarative support, the declarative evidence
//!    becomes informational and the tier is computed from childhood and
//!    behavioral fragments only.

use geode_core::signal::{MarkerKind, Polarity};

use crate::ledger::RecordedFragment;

/// Outcome of analyzing one potential's fragment history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContradictionAnalysis {
    /// A negation without a later explaining (resolving) support.
    pub unresolved: bool,
    /// Childhood evidence contradicts adult declarative evidence, so
    /// declarative fragments are excluded from tier computation.
    pub childhood_dominates: bool,
}

/// Whether childhood evidence contradicts declarative support.
pub fn childhood_dominates(fragments: &[RecordedFragment]) -> bool {
    let childhood_negates = fragments
        .iter()
        .any(|f| f.marker == MarkerKind::Childhood && f.polarity == Polarity::Contradicts);
    let declarative_supports = fragments
        .iter()
        .any(|f| f.marker == MarkerKind::Declarative && f.polarity == Polarity::Supports);
    childhood_negates && declarative_supports
}

/// Whether the fragment sequence contains an unresolved contradiction:
/// a `Contradicts` fragment after a `Supports` fragment, with no later
/// supporting fragment from a shift-resolving question to explain it.
pub fn unresolved_contradiction<'a, I>(fragments: I) -> bool
where
    I: IntoIterator<Item = &'a RecordedFragment>,
{
    let ordered: Vec<&RecordedFragment> = fragments.into_iter().collect();

    let Some(last_negation) = ordered
        .iter()
        .filter(|f| f.polarity == Polarity::Contradicts)
        .map(|f| f.seq)
        .max()
    else {
        return false;
    };

    let negates_something = ordered
        .iter()
        .any(|f| f.polarity == Polarity::Supports && f.seq < last_negation);
    if !negates_something {
        // A lone negation with nothing before it is anti-evidence, not
        // an internal contradiction.
        return false;
    }

    let explained = ordered
        .iter()
        .any(|f| f.polarity == Polarity::Supports && f.resolving && f.seq > last_negation);
    !explained
}

/// Full analysis: dominance first, then contradiction over the
/// effective (possibly declarative-stripped) sequence.
pub fn analyze(fragments: &[RecordedFragment]) -> ContradictionAnalysis {
    let dominates = childhood_dominates(fragments);
    let unresolved = if dominates {
        unresolved_contradiction(fragments.iter().filter(|f| f.marker.is_non_declarative()))
    } else {
        unresolved_contradiction(fragments.iter())
    };
    ContradictionAnalysis {
        unresolved,
        childhood_dominates: dominates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geode_core::taxonomy::{BlockId, QuestionId};

    fn fragment(seq: u64, marker: MarkerKind, polarity: Polarity, resolving: bool) -> RecordedFragment {
        RecordedFragment {
            seq,
            question: QuestionId::new(format!("q.{seq}")),
            block: BlockId::new("B"),
            marker,
            polarity,
            resolving,
        }
    }

    #[test]
    fn support_then_negation_is_unresolved() {
        let fragments = vec![
            fragment(0, MarkerKind::Declarative, Polarity::Supports, false),
            fragment(1, MarkerKind::Behavioral, Polarity::Contradicts, false),
        ];
        assert!(analyze(&fragments).unresolved);
    }

    #[test]
    fn resolving_support_explains_the_negation() {
        let fragments = vec![
            fragment(0, MarkerKind::Declarative, Polarity::Supports, false),
            fragment(1, MarkerKind::Behavioral, Polarity::Contradicts, false),
            fragment(2, MarkerKind::Childhood, Polarity::Supports, true),
        ];
        assert!(!analyze(&fragments).unresolved);
    }

    #[test]
    fn ordinary_support_does_not_explain() {
        let fragments = vec![
            fragment(0, MarkerKind::Declarative, Polarity::Supports, false),
            fragment(1, MarkerKind::Behavioral, Polarity::Contradicts, false),
            fragment(2, MarkerKind::Declarative, Polarity::Supports, false),
        ];
        assert!(analyze(&fragments).unresolved);
    }

    #[test]
    fn lone_negation_is_not_a_contradiction() {
        let fragments = vec![fragment(0, MarkerKind::Behavioral, Polarity::Contradicts, false)];
        assert!(!analyze(&fragments).unresolved);
    }

    #[test]
    fn childhood_negation_of_declarative_support_dominates() {
        let fragments = vec![
            fragment(0, MarkerKind::Declarative, Polarity::Supports, false),
            fragment(1, MarkerKind::Childhood, Polarity::Contradicts, false),
        ];
        let analysis = analyze(&fragments);
        assert!(analysis.childhood_dominates);
        // With the declarative fragment informational, the childhood
        // negation stands alone — no internal contradiction remains.
        assert!(!analysis.unresolved);
    }

    #[test]
    fn dominance_keeps_behavioral_contradictions_visible() {
        let fragments = vec![
            fragment(0, MarkerKind::Declarative, Polarity::Supports, false),
            fragment(1, MarkerKind::Behavioral, Polarity::Supports, false),
            fragment(2, MarkerKind::Childhood, Polarity::Contradicts, false),
        ];
        let analysis = analyze(&fragments);
        assert!(analysis.childhood_dominates);
        assert!(analysis.unresolved);
    }
}
