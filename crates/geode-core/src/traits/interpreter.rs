//! The answer interpretation capability.

use std::sync::Arc;

use crate::signal::Signal;
use crate::taxonomy::Question;

/// Text-and-question in, signal out.
///
/// The engine treats interpretation as a black box it calls and trusts
/// structurally: any component that can turn a raw answer into a
/// [`Signal`] qualifies, whether rule-based or backed by an external
/// reasoning service. Returning an empty signal is the correct way to
/// say "nothing could be extracted".
pub trait AnswerInterpreter: Send + Sync {
    fn interpret(&self, question: &Question, answer: &str) -> Signal;
}

/// Blanket impl: `Arc<T>` interprets by delegating to the inner `T`, so
/// a shared interpreter can be handed to many sessions.
impl<T: AnswerInterpreter> AnswerInterpreter for Arc<T> {
    fn interpret(&self, question: &Question, answer: &str) -> Signal {
        (**self).interpret(question, answer)
    }
}
