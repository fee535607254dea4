//! Stop-condition evaluation, checked before selection each turn.

use geode_bank::ReferenceStore;
use geode_core::models::{StopReason, Tier};

use crate::belief::{self, Belief};
use crate::session::SessionState;

/// Evaluate the terminating conditions that do not depend on question
/// availability. `Exhausted` is decided by selection coming up empty.
pub fn check_stop(
    store: &ReferenceStore,
    session: &SessionState,
    belief: &Belief,
) -> Option<StopReason> {
    if confident(store, session, belief) {
        return Some(StopReason::Confident);
    }
    if session.asked_count() >= session.config().max_questions {
        return Some(StopReason::MaxQuestions);
    }
    None
}

/// The Confident rule: the top Strength-row potentials (ranked by tier,
/// then evidence recency, then id) are all at High effective confidence
/// with no unresolved shift flag among them.
pub fn confident(store: &ReferenceStore, session: &SessionState, belief: &Belief) -> bool {
    let ranked = belief::rank_strength_row(store, belief, session);
    if ranked.is_empty() {
        return false;
    }

    ranked
        .iter()
        .take(session.config().top_candidates)
        .all(|id| belief.tier(id) == Tier::High && !session.shifts.is_unresolved(id))
}
