//! Shift flag state: indicator occurrences and resolutions.
//!
//! A shift is a detected distortion between natural energy and expressed
//! behavior. Occurrences accumulate monotonically; a flag is raised once
//! they pass the configured threshold and can only be resolved by a
//! signal from a contrast- or childhood-purpose question. Nothing here
//! is ever deleted — resolutions annotate, they do not erase.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use geode_core::errors::{GeodeResult, ProtocolError};
use geode_core::models::ShiftResolution;
use geode_core::signal::{MarkerKind, Polarity, SignalFragment};
use geode_core::taxonomy::{IndicatorId, PotentialId, QuestionId};

/// One observed shift indicator, tied to the evidence that carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOccurrence {
    pub indicator: IndicatorId,
    pub question: QuestionId,
    /// Ledger sequence position at observation time.
    pub seq: u64,
}

/// The annotation a resolving signal leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub outcome: ShiftResolution,
    pub question: QuestionId,
    pub seq: u64,
}

/// Per-potential shift state: the occurrence history plus at most one
/// resolution annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftState {
    pub occurrences: Vec<ShiftOccurrence>,
    pub resolution: Option<ResolutionRecord>,
}

impl ShiftState {
    /// Whether enough indicators accumulated to raise the flag.
    pub fn is_flagged(&self, threshold: usize) -> bool {
        self.occurrences.len() >= threshold
    }

    /// Flagged and not yet annotated with a resolution.
    pub fn is_unresolved(&self, threshold: usize) -> bool {
        self.is_flagged(threshold) && self.resolution.is_none()
    }

    /// Whether the flag is visible in reports: raised, and either still
    /// unresolved or resolved with an outcome that keeps the flag
    /// (`ConfirmedNatural` clears it).
    pub fn flag_visible(&self, threshold: usize) -> bool {
        self.is_flagged(threshold)
            && self
                .resolution
                .as_ref()
                .map_or(true, |r| r.outcome.flag_remains())
    }
}

/// All shift state for one session.
#[derive(Debug, Clone)]
pub struct ShiftRegistry {
    threshold: usize,
    states: FxHashMap<PotentialId, ShiftState>,
}

impl ShiftRegistry {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            states: FxHashMap::default(),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Record one indicator occurrence against a potential. Returns
    /// `true` if this observation newly raised the flag.
    pub fn observe(
        &mut self,
        potential: &PotentialId,
        indicator: &IndicatorId,
        question: &QuestionId,
        seq: u64,
    ) -> bool {
        let state = self.states.entry(potential.clone()).or_default();
        let was_flagged = state.is_flagged(self.threshold);
        state.occurrences.push(ShiftOccurrence {
            indicator: indicator.clone(),
            question: question.clone(),
            seq,
        });
        !was_flagged && state.is_flagged(self.threshold)
    }

    /// Annotate a flagged potential with a resolution outcome. The first
    /// resolution stands; later resolving signals are ignored. Resolving
    /// an unflagged potential is a caller bug.
    pub fn resolve(
        &mut self,
        potential: &PotentialId,
        outcome: ShiftResolution,
        question: &QuestionId,
        seq: u64,
    ) -> GeodeResult<()> {
        let threshold = self.threshold;
        let state = self
            .states
            .get_mut(potential)
            .ok_or_else(|| shift_not_flagged(potential))?;
        if !state.is_flagged(threshold) {
            return Err(shift_not_flagged(potential));
        }
        if state.resolution.is_none() {
            state.resolution = Some(ResolutionRecord {
                outcome,
                question: question.clone(),
                seq,
            });
        }
        Ok(())
    }

    pub fn state(&self, potential: &PotentialId) -> Option<&ShiftState> {
        self.states.get(potential)
    }

    pub fn is_flagged(&self, potential: &PotentialId) -> bool {
        self.states
            .get(potential)
            .is_some_and(|s| s.is_flagged(self.threshold))
    }

    pub fn is_unresolved(&self, potential: &PotentialId) -> bool {
        self.states
            .get(potential)
            .is_some_and(|s| s.is_unresolved(self.threshold))
    }

    pub fn resolution(&self, potential: &PotentialId) -> Option<&ResolutionRecord> {
        self.states.get(potential).and_then(|s| s.resolution.as_ref())
    }

    /// Whether the flag should appear in reports (see
    /// [`ShiftState::flag_visible`]).
    pub fn flag_visible(&self, potential: &PotentialId) -> bool {
        self.states
            .get(potential)
            .is_some_and(|s| s.flag_visible(self.threshold))
    }

    /// Potentials with an unresolved flag, in id order.
    pub fn unresolved_potentials(&self) -> Vec<&PotentialId> {
        let mut ids: Vec<&PotentialId> = self
            .states
            .iter()
            .filter(|(_, s)| s.is_unresolved(self.threshold))
            .map(|(id, _)| id)
            .collect();
        ids.sort();
        ids
    }
}

fn shift_not_flagged(potential: &PotentialId) -> geode_core::errors::GeodeError {
    ProtocolError::ShiftNotFlagged {
        potential: potential.to_string(),
    }
    .into()
}

/// Map a fragment from a shift-resolving question onto a resolution
/// outcome, per the diagnostic methodology:
///
/// - supporting behavioral/childhood evidence confirms the energy as
///   natural;
/// - a childhood negation reveals compensation (the energy was never
///   there);
/// - any other negation exposes a masked weakness;
/// - a bare declarative confirmation settles nothing.
pub fn classify_resolution(fragment: &SignalFragment) -> Option<ShiftResolution> {
    match (fragment.polarity, fragment.marker) {
        (Polarity::Supports, MarkerKind::Behavioral | MarkerKind::Childhood) => {
            Some(ShiftResolution::ConfirmedNatural)
        }
        (Polarity::Contradicts, MarkerKind::Childhood) => Some(ShiftResolution::Compensatory),
        (Polarity::Contradicts, _) => Some(ShiftResolution::MaskedWeakness),
        (Polarity::Supports, MarkerKind::Declarative) => None,
    }
}
