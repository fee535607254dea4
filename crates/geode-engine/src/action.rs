//! Controller output actions.

use serde::Serialize;

use geode_core::models::StopReason;
use geode_core::taxonomy::QuestionId;

use crate::snapshot::SessionSnapshot;

/// The next diagnostic action the controller emits each turn.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Ask this question next. The text is verbatim from the bank.
    AskQuestion { question: QuestionId, text: String },
    /// Terminate the interview, handing presentation the final state
    /// for the report compiler.
    Stop {
        reason: StopReason,
        snapshot: Box<SessionSnapshot>,
    },
}

impl Action {
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop { .. })
    }
}
