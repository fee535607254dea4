//! Keyword-driven signal extraction.

use tracing::trace;

use geode_core::signal::{MarkerKind, Polarity, Signal, SignalFragment};
use geode_core::taxonomy::{IndicatorId, PotentialId, Purpose, Question};
use geode_core::traits::AnswerInterpreter;

/// Keywords whose presence in an answer supports a potential.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub potential: PotentialId,
    /// Lowercase stems matched by substring (so `"structur"` hits both
    /// "structure" and "structured").
    pub keywords: Vec<String>,
}

/// Phrases whose presence in an answer negates a potential.
#[derive(Debug, Clone)]
pub struct AversionRule {
    pub potential: PotentialId,
    pub phrases: Vec<String>,
}

/// Phrases that trigger a shift indicator.
#[derive(Debug, Clone)]
pub struct IndicatorRule {
    pub indicator: IndicatorId,
    pub phrases: Vec<String>,
}

/// A rule-based interpreter over fixed lexicons.
///
/// Evidence attribution is restricted to the potentials the question is
/// declared to evidence — keyword hits for unrelated potentials are
/// dropped, keeping signal fragments inside the bank's metadata.
/// Indicators are not restricted: a distortion can surface anywhere.
#[derive(Debug, Clone)]
pub struct KeywordInterpreter {
    rules: Vec<KeywordRule>,
    aversions: Vec<AversionRule>,
    indicators: Vec<IndicatorRule>,
}

impl KeywordInterpreter {
    pub fn new(
        rules: Vec<KeywordRule>,
        aversions: Vec<AversionRule>,
        indicators: Vec<IndicatorRule>,
    ) -> Self {
        Self {
            rules,
            aversions,
            indicators,
        }
    }

    /// The built-in English lexicon for the nine-potential taxonomy.
    pub fn builtin() -> Self {
        crate::lexicon::builtin()
    }

    /// Marker kind implied by the question's strongest purpose:
    /// childhood questions elicit childhood evidence, behavior-probing
    /// questions elicit behavioral evidence, everything else is taken
    /// as declaration.
    fn marker_for(question: &Question) -> MarkerKind {
        if question.has_purpose(Purpose::Childhood) {
            MarkerKind::Childhood
        } else if question.has_purpose(Purpose::Contrast)
            || question.has_purpose(Purpose::ShiftDetection)
            || question.has_purpose(Purpose::ContradictionCheck)
        {
            MarkerKind::Behavioral
        } else {
            MarkerKind::Declarative
        }
    }
}

impl AnswerInterpreter for KeywordInterpreter {
    fn interpret(&self, question: &Question, answer: &str) -> Signal {
        let text = answer.to_lowercase();
        let marker = Self::marker_for(question);
        let mut signal = Signal::new(question.id.clone());

        for rule in &self.rules {
            if !question.evidences(&rule.potential) {
                continue;
            }
            if rule.keywords.iter().any(|kw| text.contains(kw.as_str())) {
                signal.fragments.push(SignalFragment {
                    potential: rule.potential.clone(),
                    marker,
                    polarity: Polarity::Supports,
                });
            }
        }

        for rule in &self.aversions {
            if !question.evidences(&rule.potential) {
                continue;
            }
            if rule.phrases.iter().any(|p| text.contains(p.as_str())) {
                // An aversion overrides a keyword hit for the same
                // potential: drop the support, keep the negation.
                signal
                    .fragments
                    .retain(|f| f.potential != rule.potential);
                signal.fragments.push(SignalFragment {
                    potential: rule.potential.clone(),
                    marker,
                    polarity: Polarity::Contradicts,
                });
            }
        }

        for rule in &self.indicators {
            if rule.phrases.iter().any(|p| text.contains(p.as_str())) {
                signal.indicators.push(rule.indicator.clone());
            }
        }

        trace!(
            question = %question.id,
            fragments = signal.fragments.len(),
            indicators = signal.indicators.len(),
            "answer interpreted"
        );
        signal
    }
}
