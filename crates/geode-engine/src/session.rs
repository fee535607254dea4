//! Per-session state: phase, asked-set, ledger, shifts, event log.

use chrono::{DateTime, Duration, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use geode_bank::ReferenceStore;
use geode_core::config::EngineConfig;
use geode_core::models::{SessionEvent, SessionEventKind, StopReason};
use geode_core::taxonomy::QuestionId;
use geode_evidence::{EvidenceLedger, ShiftRegistry};

/// Opaque session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Where the session's state machine currently stands.
///
/// `Active → AwaitingAnswer → Active → … → Terminated`. There are no
/// other states and no transitions out of `Terminated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Ready to evaluate stop conditions and select the next question.
    Active,
    /// A question is outstanding; nothing else may happen until its
    /// signal is absorbed.
    AwaitingAnswer { question: QuestionId },
    Terminated { reason: StopReason },
}

/// All mutable state of one interview session. Created at interview
/// start, mutated turn-by-turn by the controller only, never reset.
#[derive(Debug)]
pub struct SessionState {
    pub id: SessionId,
    phase: SessionPhase,
    asked: FxHashSet<QuestionId>,
    asked_order: Vec<QuestionId>,
    pub ledger: EvidenceLedger,
    pub shifts: ShiftRegistry,
    events: Vec<SessionEvent>,
    config: EngineConfig,
    started_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl SessionState {
    pub fn new(store: &ReferenceStore, config: EngineConfig, now: DateTime<Utc>) -> Self {
        let known = store.potentials().iter().map(|p| p.id.clone());
        Self {
            id: SessionId::generate(),
            phase: SessionPhase::Active,
            asked: FxHashSet::default(),
            asked_order: Vec::new(),
            ledger: EvidenceLedger::new(known),
            shifts: ShiftRegistry::new(config.shift_flag_threshold),
            events: Vec::new(),
            config,
            started_at: now,
            last_activity: now,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, SessionPhase::Terminated { .. })
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.phase {
            SessionPhase::Terminated { reason } => Some(reason),
            _ => None,
        }
    }

    // --- Asked-set (no repeats — hard invariant) ---

    pub fn was_asked(&self, question: &QuestionId) -> bool {
        self.asked.contains(question)
    }

    /// Number of questions issued so far (the running action count).
    pub fn asked_count(&self) -> usize {
        self.asked_order.len()
    }

    /// Questions in the order they were asked.
    pub fn asked_order(&self) -> &[QuestionId] {
        &self.asked_order
    }

    /// Record a question as asked. Duplicates indicate a selection bug
    /// upstream; the set and the order list stay consistent regardless.
    pub(crate) fn mark_asked(&mut self, question: QuestionId) -> bool {
        if self.asked.insert(question.clone()) {
            self.asked_order.push(question);
            true
        } else {
            false
        }
    }

    // --- Event log ---

    pub(crate) fn push_event(&mut self, kind: SessionEventKind, now: DateTime<Utc>) {
        let seq = self.events.len() as u64;
        self.events.push(SessionEvent::new(seq, now, kind));
        self.last_activity = now;
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    // --- Lifecycle timestamps ---

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    pub fn idle_duration(&self, now: DateTime<Utc>) -> Duration {
        now - self.last_activity
    }

    pub fn session_duration(&self, now: DateTime<Utc>) -> Duration {
        now - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geode_core::models::StopReason;

    fn session() -> SessionState {
        let store = test_fixtures::store();
        SessionState::new(&store, EngineConfig::default(), Utc::now())
    }

    #[test]
    fn asked_set_rejects_duplicates() {
        let mut session = session();
        assert!(session.mark_asked(QuestionId::new("now.easy_tasks")));
        assert!(!session.mark_asked(QuestionId::new("now.easy_tasks")));
        assert_eq!(session.asked_count(), 1);
    }

    #[test]
    fn events_are_sequenced() {
        let mut session = session();
        let now = Utc::now();
        session.push_event(
            SessionEventKind::QuestionAsked {
                question: QuestionId::new("now.easy_tasks"),
            },
            now,
        );
        session.push_event(
            SessionEventKind::SignalAbsorbed {
                question: QuestionId::new("now.easy_tasks"),
                fragments: 0,
                empty: true,
            },
            now,
        );

        let seqs: Vec<u64> = session.events().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn terminated_phase_is_final_and_reported() {
        let mut session = session();
        assert!(!session.is_terminated());
        session.set_phase(SessionPhase::Terminated {
            reason: StopReason::Exhausted,
        });
        assert!(session.is_terminated());
        assert_eq!(session.stop_reason(), Some(StopReason::Exhausted));
    }
}
