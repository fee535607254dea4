//! Session event log entries.
//!
//! Every session keeps an append-only event log alongside the evidence
//! ledger. Together they make a session fully replayable and auditable
//! up to the last absorbed signal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shift::ShiftResolution;
use super::stop_reason::StopReason;
use crate::taxonomy::{IndicatorId, PotentialId, QuestionId};

/// An entry in a session's append-only event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    /// Monotonic position within the session.
    pub seq: u64,
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: SessionEventKind,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEventKind {
    QuestionAsked {
        question: QuestionId,
    },
    /// A signal was absorbed. `empty` marks a no-evidence turn.
    SignalAbsorbed {
        question: QuestionId,
        fragments: usize,
        empty: bool,
    },
    ShiftFlagRaised {
        potential: PotentialId,
        indicator: IndicatorId,
    },
    ShiftResolved {
        potential: PotentialId,
        outcome: ShiftResolution,
    },
    Stopped {
        reason: StopReason,
    },
}

impl SessionEvent {
    pub fn new(seq: u64, at: DateTime<Utc>, kind: SessionEventKind) -> Self {
        Self { seq, at, kind }
    }
}
