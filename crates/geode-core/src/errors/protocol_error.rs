//! Session-boundary protocol violations — caller bugs, fatal at the
//! point of occurrence.

/// Errors raised when a caller breaks the interview protocol. These are
/// programming errors, not runtime conditions to retry.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown question id: {question}")]
    UnknownQuestion { question: String },

    #[error("unknown potential id: {potential}")]
    UnknownPotential { potential: String },

    #[error("question {question} was already asked this session")]
    RepeatedQuestion { question: String },

    #[error("signal answers {got} but the outstanding question is {expected}")]
    SignalMismatch { expected: String, got: String },

    #[error("no question is outstanding; nothing to absorb")]
    NoOutstandingQuestion,

    #[error("question {question} is still outstanding; absorb its signal first")]
    OutstandingQuestion { question: String },

    #[error("session is terminated")]
    SessionTerminated,

    #[error("potential {potential} has no shift flag to resolve")]
    ShiftNotFlagged { potential: String },

    #[error("unknown session id: {session}")]
    UnknownSession { session: String },
}
