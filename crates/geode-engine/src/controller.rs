//! The interview controller: the one component allowed to mutate a
//! session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use geode_bank::ReferenceStore;
use geode_core::config::EngineConfig;
use geode_core::errors::{GeodeResult, ProtocolError};
use geode_core::models::{SessionEventKind, StopReason};
use geode_core::signal::Signal;
use geode_core::taxonomy::PotentialId;
use geode_evidence::shift::classify_resolution;

use crate::action::Action;
use crate::belief::Belief;
use crate::selection;
use crate::session::{SessionPhase, SessionState};
use crate::snapshot::SessionSnapshot;
use crate::stop;

/// Drives one interview session against shared read-only reference data.
///
/// Strictly turn-based: `next_action` may only be called while no
/// question is outstanding, and `absorb_signal` only while one is. All
/// selection and confidence computation is synchronous; the only
/// genuinely slow collaborator (answer interpretation) lives outside.
pub struct InterviewController {
    store: Arc<ReferenceStore>,
    session: SessionState,
}

impl InterviewController {
    pub fn new(
        store: Arc<ReferenceStore>,
        config: EngineConfig,
        now: DateTime<Utc>,
    ) -> GeodeResult<Self> {
        config.validate()?;
        let session = SessionState::new(&store, config, now);
        info!(session = %session.id, "interview session created");
        Ok(Self { store, session })
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    /// Evaluate stop conditions, then select the next question.
    ///
    /// Only legal while no question is outstanding and the session is
    /// not terminated.
    pub fn next_action(&mut self, now: DateTime<Utc>) -> GeodeResult<Action> {
        match self.session.phase().clone() {
            SessionPhase::Terminated { .. } => Err(ProtocolError::SessionTerminated.into()),
            SessionPhase::AwaitingAnswer { question } => Err(ProtocolError::OutstandingQuestion {
                question: question.to_string(),
            }
            .into()),
            SessionPhase::Active => {
                let belief = Belief::compute(&self.store, &self.session);

                if let Some(reason) = stop::check_stop(&self.store, &self.session, &belief) {
                    return Ok(self.terminate(reason, now));
                }

                match selection::select_next(&self.store, &self.session, &belief) {
                    Some(question_id) => {
                        let question = self.store.require_question(&question_id)?;
                        let text = question.text.clone();

                        self.session.mark_asked(question_id.clone());
                        self.session.push_event(
                            SessionEventKind::QuestionAsked {
                                question: question_id.clone(),
                            },
                            now,
                        );
                        self.session.set_phase(SessionPhase::AwaitingAnswer {
                            question: question_id.clone(),
                        });
                        debug!(
                            session = %self.session.id,
                            question = %question_id,
                            asked = self.session.asked_count(),
                            "question selected"
                        );
                        Ok(Action::AskQuestion {
                            question: question_id,
                            text,
                        })
                    }
                    None => Ok(self.terminate(StopReason::Exhausted, now)),
                }
            }
        }
    }

    /// Absorb the signal for the outstanding question.
    ///
    /// An empty signal is a valid no-evidence turn: the question stays
    /// consumed and the loop continues. A signal referencing an unknown
    /// potential is a fatal protocol error, detected before any ledger
    /// mutation so the session never holds a half-recorded signal.
    pub fn absorb_signal(&mut self, signal: &Signal, now: DateTime<Utc>) -> GeodeResult<()> {
        let expected = match self.session.phase() {
            SessionPhase::AwaitingAnswer { question } => question.clone(),
            SessionPhase::Active => return Err(ProtocolError::NoOutstandingQuestion.into()),
            SessionPhase::Terminated { .. } => return Err(ProtocolError::SessionTerminated.into()),
        };
        if signal.question != expected {
            return Err(ProtocolError::SignalMismatch {
                expected: expected.to_string(),
                got: signal.question.to_string(),
            }
            .into());
        }

        let question = self.store.require_question(&signal.question)?.clone();

        // Validate every fragment up front — all or nothing.
        for fragment in &signal.fragments {
            self.store.require_potential(&fragment.potential)?;
        }
        for indicator in &signal.indicators {
            if self.store.indicator(indicator).is_none() {
                warn!(
                    session = %self.session.id,
                    indicator = %indicator,
                    "signal carries an indicator absent from reference data"
                );
            }
        }

        if signal.is_empty() {
            debug!(session = %self.session.id, question = %expected, "no-evidence turn");
            self.session.push_event(
                SessionEventKind::SignalAbsorbed {
                    question: expected,
                    fragments: 0,
                    empty: true,
                },
                now,
            );
            self.session.set_phase(SessionPhase::Active);
            return Ok(());
        }

        let resolving = question.resolves_shifts();

        // 1. Evidence lands in the ledger.
        for fragment in &signal.fragments {
            self.session.ledger.record(
                &fragment.potential,
                &signal.question,
                &question.block,
                fragment.marker,
                fragment.polarity,
                resolving,
            )?;
        }

        // 2. A resolving signal settles flags raised by earlier turns.
        if resolving {
            let seq = self.session.ledger.next_seq();
            for fragment in &signal.fragments {
                if !self.session.shifts.is_unresolved(&fragment.potential) {
                    continue;
                }
                if let Some(outcome) = classify_resolution(fragment) {
                    self.session
                        .shifts
                        .resolve(&fragment.potential, outcome, &signal.question, seq)?;
                    info!(
                        session = %self.session.id,
                        potential = %fragment.potential,
                        outcome = outcome.name(),
                        "shift flag resolved"
                    );
                    self.session.push_event(
                        SessionEventKind::ShiftResolved {
                            potential: fragment.potential.clone(),
                            outcome,
                        },
                        now,
                    );
                }
            }
        }

        // 3. New indicators attach to the potentials this signal touched
        // (falling back to the question's declared potentials).
        let targets: Vec<PotentialId> = if signal.fragments.is_empty() {
            question.potentials.iter().cloned().collect()
        } else {
            signal
                .touched_potentials()
                .into_iter()
                .cloned()
                .collect()
        };
        let seq = self.session.ledger.next_seq();
        for indicator in &signal.indicators {
            for target in &targets {
                let raised =
                    self.session
                        .shifts
                        .observe(target, indicator, &signal.question, seq);
                if raised {
                    info!(
                        session = %self.session.id,
                        potential = %target,
                        indicator = %indicator,
                        "shift flag raised"
                    );
                    self.session.push_event(
                        SessionEventKind::ShiftFlagRaised {
                            potential: target.clone(),
                            indicator: indicator.clone(),
                        },
                        now,
                    );
                }
            }
        }

        self.session.push_event(
            SessionEventKind::SignalAbsorbed {
                question: expected,
                fragments: signal.fragments.len(),
                empty: false,
            },
            now,
        );
        self.session.set_phase(SessionPhase::Active);
        Ok(())
    }

    /// Read-only snapshot of the session for reporting.
    pub fn snapshot(&self, now: DateTime<Utc>) -> SessionSnapshot {
        SessionSnapshot::build(&self.store, &self.session, now)
    }

    fn terminate(&mut self, reason: StopReason, now: DateTime<Utc>) -> Action {
        info!(
            session = %self.session.id,
            reason = reason.name(),
            asked = self.session.asked_count(),
            "interview terminated"
        );
        self.session
            .push_event(SessionEventKind::Stopped { reason }, now);
        self.session.set_phase(SessionPhase::Terminated { reason });
        Action::Stop {
            reason,
            snapshot: Box::new(self.snapshot(now)),
        }
    }
}
