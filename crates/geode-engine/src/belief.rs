//! Current belief over the 9 potentials, derived fresh from session
//! state each turn.

use rustc_hash::FxHashMap;

use geode_bank::ReferenceStore;
use geode_core::models::Tier;
use geode_core::taxonomy::{PotentialId, Row};
use geode_evidence::{assess, TierAssessment};

use crate::session::SessionState;

/// Per-potential assessments for one turn, computed once and consulted
/// by selection, stop checks, and snapshots.
#[derive(Debug, Clone)]
pub struct Belief {
    assessments: FxHashMap<PotentialId, TierAssessment>,
}

impl Belief {
    /// Assess every potential in the taxonomy against the session's
    /// ledger and shift state.
    pub fn compute(store: &ReferenceStore, session: &SessionState) -> Self {
        let assessments = store
            .potentials()
            .iter()
            .map(|p| {
                let assessment = assess(&p.id, &session.ledger, &session.shifts, session.config());
                (p.id.clone(), assessment)
            })
            .collect();
        Self { assessments }
    }

    pub fn assessment(&self, potential: &PotentialId) -> Option<&TierAssessment> {
        self.assessments.get(potential)
    }

    /// Assessment for a potential, treating an absent entry as the
    /// no-evidence Low assessment.
    pub fn assessment_or_empty(&self, potential: &PotentialId) -> TierAssessment {
        self.assessments
            .get(potential)
            .copied()
            .unwrap_or(TierAssessment {
                base: Tier::Low,
                effective: Tier::Low,
                unresolved_contradiction: false,
                childhood_dominant: false,
                shift_discounted: false,
                capped: false,
            })
    }

    /// Effective tier; `Low` for a potential with no recorded evidence.
    pub fn tier(&self, potential: &PotentialId) -> Tier {
        self.assessments
            .get(potential)
            .map(|a| a.effective)
            .unwrap_or(Tier::Low)
    }

    /// Potentials at Low effective confidence, in id order.
    pub fn low_potentials(&self) -> Vec<&PotentialId> {
        let mut ids: Vec<&PotentialId> = self
            .assessments
            .iter()
            .filter(|(_, a)| a.effective == Tier::Low)
            .map(|(id, _)| id)
            .collect();
        ids.sort();
        ids
    }
}

/// Rank potential ids by (effective tier desc, evidence recency desc,
/// id asc). Deterministic: two equal ledgers rank identically.
pub fn rank<'a>(
    ids: impl IntoIterator<Item = &'a PotentialId>,
    belief: &Belief,
    session: &SessionState,
) -> Vec<PotentialId> {
    let mut ranked: Vec<&PotentialId> = ids.into_iter().collect();
    ranked.sort_by(|a, b| {
        belief
            .tier(b)
            .cmp(&belief.tier(a))
            .then_with(|| {
                session
                    .ledger
                    .last_support_seq(b)
                    .cmp(&session.ledger.last_support_seq(a))
            })
            .then_with(|| a.cmp(b))
    });
    ranked.into_iter().cloned().collect()
}

/// The Strength-row potentials ranked for the Confident stop rule and
/// report ordering.
pub fn rank_strength_row(
    store: &ReferenceStore,
    belief: &Belief,
    session: &SessionState,
) -> Vec<PotentialId> {
    rank(
        store.potentials_in_row(Row::Strength).map(|p| &p.id),
        belief,
        session,
    )
}
