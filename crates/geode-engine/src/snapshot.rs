//! Read-only terminal snapshot handed to the report compiler.
//!
//! The engine exposes structured state only — rendering client, master,
//! and matrix reports from it is someone else's job.

use chrono::{DateTime, Utc};
use serde::Serialize;

use geode_bank::ReferenceStore;
use geode_core::models::{SessionEvent, ShiftResolution, StopReason, Tier};
use geode_core::signal::MarkerKind;
use geode_core::taxonomy::{Column, PotentialId, QuestionId, Row};
use geode_evidence::{RecordedFragment, ResolutionRecord, ShiftOccurrence, TierAssessment};

use crate::belief::{self, Belief};
use crate::session::{SessionId, SessionState};

/// Shift state of one potential, as reported.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftReport {
    /// Whether the flag is currently visible (unresolved, or resolved
    /// with an outcome that keeps it).
    pub flagged: bool,
    pub unresolved: bool,
    pub occurrences: Vec<ShiftOccurrence>,
    pub resolution: Option<ResolutionRecord>,
}

/// Everything the report compiler needs about one potential.
#[derive(Debug, Clone, Serialize)]
pub struct PotentialReport {
    pub id: PotentialId,
    pub name: String,
    pub row: Row,
    pub column: Column,
    /// Row after shift reclassification: a compensatory resolution moves
    /// the potential into the delegation zone.
    pub effective_row: Row,
    pub tier: Tier,
    pub assessment: TierAssessment,
    pub contexts: usize,
    pub markers: Vec<MarkerKind>,
    pub shift: Option<ShiftReport>,
    pub fragments: Vec<RecordedFragment>,
}

/// Final (or in-flight) state of one session, serializable for
/// downstream reporting.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session: SessionId,
    pub generated_at: DateTime<Utc>,
    pub started_at: DateTime<Utc>,
    /// Present once the session terminated.
    pub stop_reason: Option<StopReason>,
    pub questions_asked: usize,
    pub asked: Vec<QuestionId>,
    /// All 9 potentials, in id order.
    pub potentials: Vec<PotentialReport>,
    /// All potentials ranked by (tier, evidence recency, id).
    pub ranked: Vec<PotentialId>,
    /// Strength-row potentials in rank order — the diagnosis headline.
    pub strengths: Vec<PotentialId>,
    /// Potentials carrying a visible shift flag.
    pub risks: Vec<PotentialId>,
    pub events: Vec<SessionEvent>,
}

impl SessionSnapshot {
    pub fn build(store: &ReferenceStore, session: &SessionState, now: DateTime<Utc>) -> Self {
        let belief = Belief::compute(store, session);

        let potentials: Vec<PotentialReport> = store
            .potentials()
            .iter()
            .map(|potential| {
                let assessment = belief.assessment_or_empty(&potential.id);

                let resolution = session.shifts.resolution(&potential.id).cloned();
                let effective_row = match resolution.as_ref().map(|r| r.outcome) {
                    Some(ShiftResolution::Compensatory) => Row::Weakness,
                    _ => potential.row(),
                };

                let shift = session.shifts.state(&potential.id).map(|state| ShiftReport {
                    flagged: session.shifts.flag_visible(&potential.id),
                    unresolved: session.shifts.is_unresolved(&potential.id),
                    occurrences: state.occurrences.clone(),
                    resolution,
                });

                PotentialReport {
                    id: potential.id.clone(),
                    name: potential.name.clone(),
                    row: potential.row(),
                    column: potential.column(),
                    effective_row,
                    tier: assessment.effective,
                    assessment,
                    contexts: session.ledger.context_count(&potential.id),
                    markers: session.ledger.marker_types(&potential.id).into_iter().collect(),
                    shift,
                    fragments: session.ledger.fragments(&potential.id).to_vec(),
                }
            })
            .collect();

        let ranked = belief::rank(
            store.potentials().iter().map(|p| &p.id),
            &belief,
            session,
        );
        let strengths = belief::rank_strength_row(store, &belief, session);
        let risks: Vec<PotentialId> = potentials
            .iter()
            .filter(|p| p.shift.as_ref().is_some_and(|s| s.flagged))
            .map(|p| p.id.clone())
            .collect();

        Self {
            session: session.id,
            generated_at: now,
            started_at: session.started_at(),
            stop_reason: session.stop_reason(),
            questions_asked: session.asked_count(),
            asked: session.asked_order().to_vec(),
            potentials,
            ranked,
            strengths,
            risks,
            events: session.events().to_vec(),
        }
    }

    /// The top `n` potentials overall.
    pub fn top_potentials(&self, n: usize) -> &[PotentialId] {
        &self.ranked[..self.ranked.len().min(n)]
    }

    /// JSON export for the report compiler boundary.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
