//! The confidence model: a pure mapping from accumulated evidence to a
//! tier.
//!
//! `assess` is deterministic and referentially transparent over its
//! inputs — same ledger, shift state, and config always produce the
//! same tier. Nothing here mutates anything.

use serde::{Deserialize, Serialize};

use geode_core::config::EngineConfig;
use geode_core::models::{ShiftResolution, Tier};
use geode_core::signal::Polarity;
use geode_core::taxonomy::PotentialId;

use crate::contradiction;
use crate::ledger::{EvidenceLedger, RecordedFragment};
use crate::shift::ShiftRegistry;

/// Everything the tier computation concluded about one potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAssessment {
    /// Tier before shift adjustment.
    pub base: Tier,
    /// Tier after shift discount/cap — the one that drives decisions.
    pub effective: Tier,
    pub unresolved_contradiction: bool,
    /// Declarative evidence was excluded because childhood evidence
    /// contradicts it.
    pub childhood_dominant: bool,
    /// An unresolved shift flag discounted the tier by one step.
    pub shift_discounted: bool,
    /// A masked-weakness resolution capped the tier at Low.
    pub capped: bool,
}

/// Compute the full assessment for one potential.
pub fn assess(
    potential: &PotentialId,
    ledger: &EvidenceLedger,
    shifts: &ShiftRegistry,
    config: &EngineConfig,
) -> TierAssessment {
    let all = ledger.fragments(potential);
    let analysis = contradiction::analyze(all);

    let effective_fragments: Vec<&RecordedFragment> = if analysis.childhood_dominates {
        all.iter().filter(|f| f.marker.is_non_declarative()).collect()
    } else {
        all.iter().collect()
    };

    let base = base_tier(&effective_fragments, analysis.unresolved, config);

    let mut effective = base;
    let mut shift_discounted = false;
    let mut capped = false;

    match shifts.resolution(potential).map(|r| r.outcome) {
        Some(ShiftResolution::MaskedWeakness) => {
            capped = effective > Tier::Low;
            effective = Tier::Low;
        }
        // ConfirmedNatural restores full confidence; Compensatory moves
        // the potential's effective row instead of its tier.
        Some(ShiftResolution::ConfirmedNatural) | Some(ShiftResolution::Compensatory) => {}
        None => {
            if shifts.is_unresolved(potential) {
                effective = effective.downgraded();
                shift_discounted = base > Tier::Low;
            }
        }
    }

    TierAssessment {
        base,
        effective,
        unresolved_contradiction: analysis.unresolved,
        childhood_dominant: analysis.childhood_dominates,
        shift_discounted,
        capped,
    }
}

/// Shortcut: just the effective tier.
pub fn tier(
    potential: &PotentialId,
    ledger: &EvidenceLedger,
    shifts: &ShiftRegistry,
    config: &EngineConfig,
) -> Tier {
    assess(potential, ledger, shifts, config).effective
}

fn base_tier(fragments: &[&RecordedFragment], unresolved: bool, config: &EngineConfig) -> Tier {
    let supports: Vec<&&RecordedFragment> = fragments
        .iter()
        .filter(|f| f.polarity == Polarity::Supports)
        .collect();

    let mut blocks: Vec<_> = supports.iter().map(|f| &f.block).collect();
    blocks.sort();
    blocks.dedup();
    let contexts = blocks.len();

    let non_declarative = supports.iter().any(|f| f.marker.is_non_declarative());

    if unresolved {
        return Tier::Low;
    }
    if contexts >= config.confirmations_for_high && non_declarative {
        return Tier::High;
    }
    // Partial/indirect confirmation: any non-declarative support, or
    // declarative-only support from enough distinct contexts.
    if (contexts >= 1 && non_declarative) || contexts >= 2 {
        return Tier::Medium;
    }
    Tier::Low
}

#[cfg(test)]
mod tests {
    use super::*;
    use geode_core::signal::MarkerKind;
    use geode_core::taxonomy::{BlockId, QuestionId};

    fn potential() -> PotentialId {
        PotentialId::new("citrine")
    }

    fn ledger() -> EvidenceLedger {
        EvidenceLedger::new([potential()])
    }

    fn shifts() -> ShiftRegistry {
        ShiftRegistry::new(1)
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn record(
        ledger: &mut EvidenceLedger,
        block: &str,
        marker: MarkerKind,
        polarity: Polarity,
        resolving: bool,
    ) {
        ledger
            .record(
                &potential(),
                &QuestionId::new(format!("{}.q", block.to_lowercase())),
                &BlockId::new(block),
                marker,
                polarity,
                resolving,
            )
            .unwrap();
    }

    #[test]
    fn single_declarative_signal_is_low() {
        let mut ledger = ledger();
        record(&mut ledger, "B", MarkerKind::Declarative, Polarity::Supports, false);
        assert_eq!(tier(&potential(), &ledger, &shifts(), &config()), Tier::Low);
    }

    #[test]
    fn two_contexts_with_non_declarative_marker_is_high() {
        let mut ledger = ledger();
        record(&mut ledger, "B", MarkerKind::Behavioral, Polarity::Supports, false);
        record(&mut ledger, "C", MarkerKind::Childhood, Polarity::Supports, false);
        assert_eq!(tier(&potential(), &ledger, &shifts(), &config()), Tier::High);
    }

    #[test]
    fn declarative_only_from_two_contexts_is_medium() {
        let mut ledger = ledger();
        record(&mut ledger, "A", MarkerKind::Declarative, Polarity::Supports, false);
        record(&mut ledger, "B", MarkerKind::Declarative, Polarity::Supports, false);
        assert_eq!(tier(&potential(), &ledger, &shifts(), &config()), Tier::Medium);
    }

    #[test]
    fn behavioral_support_in_one_context_is_medium() {
        let mut ledger = ledger();
        record(&mut ledger, "D", MarkerKind::Behavioral, Polarity::Supports, false);
        assert_eq!(tier(&potential(), &ledger, &shifts(), &config()), Tier::Medium);
    }

    #[test]
    fn unresolved_contradiction_forces_low() {
        let mut ledger = ledger();
        record(&mut ledger, "B", MarkerKind::Behavioral, Polarity::Supports, false);
        record(&mut ledger, "C", MarkerKind::Childhood, Polarity::Supports, false);
        record(&mut ledger, "D", MarkerKind::Behavioral, Polarity::Contradicts, false);

        let assessment = assess(&potential(), &ledger, &shifts(), &config());
        assert!(assessment.unresolved_contradiction);
        assert_eq!(assessment.effective, Tier::Low);
    }

    #[test]
    fn unresolved_shift_flag_downgrades_one_step() {
        let mut ledger = ledger();
        record(&mut ledger, "B", MarkerKind::Behavioral, Polarity::Supports, false);
        record(&mut ledger, "C", MarkerKind::Childhood, Polarity::Supports, false);

        let mut shifts = shifts();
        shifts.observe(
            &potential(),
            &geode_core::taxonomy::IndicatorId::new("obligation_language"),
            &QuestionId::new("d.1"),
            2,
        );

        let assessment = assess(&potential(), &ledger, &shifts, &config());
        assert_eq!(assessment.base, Tier::High);
        assert_eq!(assessment.effective, Tier::Medium);
        assert!(assessment.shift_discounted);
    }

    #[test]
    fn confirmed_natural_resolution_restores_confidence() {
        let mut ledger = ledger();
        record(&mut ledger, "B", MarkerKind::Behavioral, Polarity::Supports, false);
        record(&mut ledger, "C", MarkerKind::Childhood, Polarity::Supports, true);

        let mut shifts = shifts();
        shifts.observe(
            &potential(),
            &geode_core::taxonomy::IndicatorId::new("obligation_language"),
            &QuestionId::new("d.1"),
            1,
        );
        shifts
            .resolve(
                &potential(),
                geode_core::models::ShiftResolution::ConfirmedNatural,
                &QuestionId::new("c.1"),
                2,
            )
            .unwrap();

        assert_eq!(tier(&potential(), &ledger, &shifts, &config()), Tier::High);
    }

    #[test]
    fn masked_weakness_caps_at_low() {
        let mut ledger = ledger();
        record(&mut ledger, "B", MarkerKind::Behavioral, Polarity::Supports, false);
        record(&mut ledger, "C", MarkerKind::Childhood, Polarity::Supports, false);

        let mut shifts = shifts();
        shifts.observe(
            &potential(),
            &geode_core::taxonomy::IndicatorId::new("obligation_language"),
            &QuestionId::new("d.1"),
            2,
        );
        shifts
            .resolve(
                &potential(),
                geode_core::models::ShiftResolution::MaskedWeakness,
                &QuestionId::new("c.1"),
                3,
            )
            .unwrap();

        let assessment = assess(&potential(), &ledger, &shifts, &config());
        assert_eq!(assessment.effective, Tier::Low);
        assert!(assessment.capped);
    }

    #[test]
    fn childhood_dominance_excludes_declarative_support() {
        let mut ledger = ledger();
        // Two contexts of declarative support…
        record(&mut ledger, "A", MarkerKind::Declarative, Polarity::Supports, false);
        record(&mut ledger, "B", MarkerKind::Declarative, Polarity::Supports, false);
        // …contradicted by childhood evidence.
        record(&mut ledger, "C", MarkerKind::Childhood, Polarity::Contradicts, false);

        let assessment = assess(&potential(), &ledger, &shifts(), &config());
        assert!(assessment.childhood_dominant);
        // Without the declarative fragments there is no support left.
        assert_eq!(assessment.effective, Tier::Low);
    }

    #[test]
    fn same_ledger_same_tier() {
        let mut ledger = ledger();
        record(&mut ledger, "B", MarkerKind::Behavioral, Polarity::Supports, false);
        record(&mut ledger, "C", MarkerKind::Childhood, Polarity::Supports, false);

        let first = assess(&potential(), &ledger, &shifts(), &config());
        let second = assess(&potential(), &ledger, &shifts(), &config());
        assert_eq!(first, second);
    }
}
