//! Startup-fatal integrity checks on raw reference data.
//!
//! Validation runs before any session can start. The first violation
//! found aborts the load — a broken taxonomy must never silently produce
//! a plausible-looking diagnosis.

use rustc_hash::FxHashMap;

use geode_core::errors::TaxonomyError;
use geode_core::taxonomy::potential::POTENTIAL_COUNT;
use geode_core::taxonomy::{BlockId, Cell};

use crate::schema::RawReference;

/// Validate a raw reference document.
pub fn validate(raw: &RawReference) -> Result<(), TaxonomyError> {
    validate_potentials(raw)?;
    validate_questions(raw)?;
    validate_indicators(raw)?;
    Ok(())
}

fn validate_potentials(raw: &RawReference) -> Result<(), TaxonomyError> {
    if raw.potentials.len() != POTENTIAL_COUNT {
        return Err(TaxonomyError::PotentialCount {
            expected: POTENTIAL_COUNT,
            found: raw.potentials.len(),
        });
    }

    let mut seen_ids: FxHashMap<&str, ()> = FxHashMap::default();
    let mut cells: FxHashMap<Cell, &str> = FxHashMap::default();

    for potential in &raw.potentials {
        if seen_ids.insert(potential.id.as_str(), ()).is_some() {
            return Err(TaxonomyError::DuplicateId {
                kind: "potential",
                id: potential.id.clone(),
            });
        }

        let cell = Cell::new(potential.row, potential.column);
        if let Some(first) = cells.insert(cell, potential.id.as_str()) {
            return Err(TaxonomyError::CellConflict {
                cell: cell.to_string(),
                first: first.to_string(),
                second: potential.id.clone(),
            });
        }
    }

    // 9 potentials, 9 distinct cells: the matrix is covered bijectively.
    debug_assert_eq!(cells.len(), POTENTIAL_COUNT);
    Ok(())
}

fn validate_questions(raw: &RawReference) -> Result<(), TaxonomyError> {
    let known: FxHashMap<&str, ()> = raw
        .potentials
        .iter()
        .map(|p| (p.id.as_str(), ()))
        .collect();

    let mut seen_ids: FxHashMap<&str, ()> = FxHashMap::default();
    let mut positions: FxHashMap<(&str, u32), &str> = FxHashMap::default();

    for question in &raw.questions {
        if seen_ids.insert(question.id.as_str(), ()).is_some() {
            return Err(TaxonomyError::DuplicateId {
                kind: "question",
                id: question.id.clone(),
            });
        }

        if !BlockId::new(question.block.clone()).is_valid() {
            return Err(TaxonomyError::InvalidBlock {
                question: question.id.clone(),
                block: question.block.clone(),
            });
        }

        if question.text.trim().is_empty() {
            return Err(TaxonomyError::EmptyQuestionText {
                question: question.id.clone(),
            });
        }

        if question.purposes.is_empty() {
            return Err(TaxonomyError::NoPurposes {
                question: question.id.clone(),
            });
        }

        for potential in &question.potentials {
            if !known.contains_key(potential.as_str()) {
                return Err(TaxonomyError::UnknownPotentialRef {
                    question: question.id.clone(),
                    potential: potential.clone(),
                });
            }
        }

        let position = (question.block.as_str(), question.index);
        if let Some(first) = positions.insert(position, question.id.as_str()) {
            return Err(TaxonomyError::DuplicatePosition {
                first: first.to_string(),
                second: question.id.clone(),
                block: question.block.clone(),
                index: question.index,
            });
        }
    }

    Ok(())
}

fn validate_indicators(raw: &RawReference) -> Result<(), TaxonomyError> {
    let mut seen_ids: FxHashMap<&str, ()> = FxHashMap::default();
    for indicator in &raw.indicators {
        if seen_ids.insert(indicator.id.as_str(), ()).is_some() {
            return Err(TaxonomyError::DuplicateId {
                kind: "indicator",
                id: indicator.id.clone(),
            });
        }
    }
    Ok(())
}
