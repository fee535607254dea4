//! The question-selection policy.
//!
//! An explicit ranked rule list evaluated in fixed order, with a
//! deterministic tie-break — the same transcript always yields the same
//! next question. Priority tiers, highest first:
//!
//! 1. Resolve an unresolved shift flag (contrast/childhood purpose) for
//!    any potential currently below High.
//! 2. Add a second confirming context for a Strength-row potential with
//!    exactly one context.
//! 3. General clarification for zero-context potentials in columns that
//!    have produced no evidence at all.
//! 4. Final validation once every Strength-row potential is Medium or
//!    higher.
//!
//! A tier with no unasked matching question falls through to the next;
//! when no tier matches anything the bank is exhausted for this session.

use rustc_hash::{FxHashMap, FxHashSet};

use geode_bank::ReferenceStore;
use geode_core::models::Tier;
use geode_core::taxonomy::{BlockId, Column, PotentialId, Purpose, Question, QuestionId, Row};

use crate::belief::Belief;
use crate::session::SessionState;

/// Pick the next question, or `None` when no eligible question remains.
pub fn select_next(
    store: &ReferenceStore,
    session: &SessionState,
    belief: &Belief,
) -> Option<QuestionId> {
    let unasked: Vec<&Question> = store
        .questions()
        .iter()
        .filter(|q| !session.was_asked(&q.id))
        .collect();
    if unasked.is_empty() {
        return None;
    }

    let tiers = [
        shift_resolution_candidates(session, belief, &unasked),
        second_context_candidates(store, session, &unasked),
        clarification_candidates(store, session, &unasked),
        validation_candidates(store, belief, &unasked),
    ];

    for candidates in tiers {
        if let Some(question) = pick(&candidates, &unasked, belief) {
            return Some(question);
        }
    }
    None
}

/// Tier 1: questions that can resolve an unresolved shift flag for a
/// potential still below High.
fn shift_resolution_candidates<'a>(
    session: &SessionState,
    belief: &Belief,
    unasked: &[&'a Question],
) -> Vec<&'a Question> {
    let targets: Vec<&PotentialId> = session
        .shifts
        .unresolved_potentials()
        .into_iter()
        .filter(|id| belief.tier(id) < Tier::High)
        .collect();
    if targets.is_empty() {
        return Vec::new();
    }

    unasked
        .iter()
        .filter(|q| q.resolves_shifts() && targets.iter().any(|t| q.evidences(t)))
        .copied()
        .collect()
}

/// Tier 2: questions adding a second confirming context for a
/// Strength-row potential that has exactly one.
fn second_context_candidates<'a>(
    store: &ReferenceStore,
    session: &SessionState,
    unasked: &[&'a Question],
) -> Vec<&'a Question> {
    let single_context: Vec<(&PotentialId, &BlockId)> = store
        .potentials_in_row(Row::Strength)
        .filter_map(|p| {
            let blocks = session.ledger.support_blocks(&p.id);
            match blocks.as_slice() {
                [only] => Some((&p.id, *only)),
                _ => None,
            }
        })
        .collect();
    if single_context.is_empty() {
        return Vec::new();
    }

    unasked
        .iter()
        .filter(|q| {
            single_context
                .iter()
                .any(|(id, block)| q.evidences(id) && &q.block != *block)
        })
        .copied()
        .collect()
}

/// Tier 3: clarification questions for zero-context potentials in
/// columns no evidence has touched yet.
fn clarification_candidates<'a>(
    store: &ReferenceStore,
    session: &SessionState,
    unasked: &[&'a Question],
) -> Vec<&'a Question> {
    let mut explored_columns: FxHashSet<Column> = FxHashSet::default();
    for potential in store.potentials() {
        if session.ledger.context_count(&potential.id) > 0 {
            explored_columns.insert(potential.column());
        }
    }

    let targets: Vec<&PotentialId> = store
        .potentials()
        .iter()
        .filter(|p| {
            !explored_columns.contains(&p.column()) && session.ledger.context_count(&p.id) == 0
        })
        .map(|p| &p.id)
        .collect();
    if targets.is_empty() {
        return Vec::new();
    }

    unasked
        .iter()
        .filter(|q| {
            q.has_purpose(Purpose::Clarification) && targets.iter().any(|t| q.evidences(t))
        })
        .copied()
        .collect()
}

/// Tier 4: final validation, unlocked once every Strength-row potential
/// sits at Medium or higher.
fn validation_candidates<'a>(
    store: &ReferenceStore,
    belief: &Belief,
    unasked: &[&'a Question],
) -> Vec<&'a Question> {
    let unlocked = store
        .potentials_in_row(Row::Strength)
        .all(|p| belief.tier(&p.id) >= Tier::Medium);
    if !unlocked {
        return Vec::new();
    }

    unasked
        .iter()
        .filter(|q| q.has_purpose(Purpose::Validation))
        .copied()
        .collect()
}

/// Deterministic tie-break within a tier: prefer the block whose unasked
/// questions touch the most potentials currently at Low confidence, then
/// lowest block letter, then lowest question index.
fn pick(candidates: &[&Question], unasked: &[&Question], belief: &Belief) -> Option<QuestionId> {
    if candidates.is_empty() {
        return None;
    }

    let low: FxHashSet<&PotentialId> = belief.low_potentials().into_iter().collect();

    // Score each block by the distinct Low potentials its remaining
    // questions can still evidence.
    let mut block_scores: FxHashMap<&BlockId, usize> = FxHashMap::default();
    for block in candidates.iter().map(|q| &q.block) {
        if block_scores.contains_key(block) {
            continue;
        }
        let touched: FxHashSet<&PotentialId> = unasked
            .iter()
            .filter(|q| &q.block == block)
            .flat_map(|q| q.potentials.iter())
            .filter(|p| low.contains(p))
            .collect();
        block_scores.insert(block, touched.len());
    }

    candidates
        .iter()
        .min_by(|a, b| {
            let score_a = block_scores.get(&a.block).copied().unwrap_or(0);
            let score_b = block_scores.get(&b.block).copied().unwrap_or(0);
            score_b
                .cmp(&score_a)
                .then_with(|| a.block.cmp(&b.block))
                .then_with(|| a.index.cmp(&b.index))
        })
        .map(|q| q.id.clone())
}
