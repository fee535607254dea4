//! TOML loading entry points for reference data.

use std::path::Path;

use tracing::info;

use geode_core::errors::TaxonomyError;
use geode_core::taxonomy::{
    BlockId, IndicatorId, Potential, PotentialId, Question, QuestionId, ShiftIndicator,
};

use crate::schema::RawReference;
use crate::store::ReferenceStore;
use crate::validate;

/// Load reference data from a TOML string. `origin` names the source in
/// error messages (a path, or `"<inline>"` for embedded data).
pub fn load_str(raw: &str, origin: &str) -> Result<ReferenceStore, TaxonomyError> {
    let document: RawReference = toml::from_str(raw).map_err(|e| TaxonomyError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;

    validate::validate(&document)?;

    let potentials: Vec<Potential> = document
        .potentials
        .into_iter()
        .map(|p| Potential::new(PotentialId::new(p.id), p.name, p.row, p.column))
        .collect();

    let questions: Vec<Question> = document
        .questions
        .into_iter()
        .map(|q| Question {
            id: QuestionId::new(q.id),
            block: BlockId::new(q.block),
            index: q.index,
            text: q.text,
            purposes: q.purposes.into_iter().collect(),
            potentials: q.potentials.into_iter().map(PotentialId::new).collect(),
            kind: q.kind,
            options: q.options,
        })
        .collect();

    let indicators: Vec<ShiftIndicator> = document
        .indicators
        .into_iter()
        .map(|i| ShiftIndicator {
            id: IndicatorId::new(i.id),
            description: i.description,
            tags: i.tags,
        })
        .collect();

    let store = ReferenceStore::build(potentials, questions, indicators);
    info!(
        questions = store.question_count(),
        indicators = store.indicators().len(),
        origin,
        "reference data loaded"
    );
    Ok(store)
}

/// Load reference data from a TOML file.
pub fn load_path(path: &Path) -> Result<ReferenceStore, TaxonomyError> {
    let raw = std::fs::read_to_string(path).map_err(|_| TaxonomyError::FileNotFound {
        path: path.display().to_string(),
    })?;
    load_str(&raw, &path.display().to_string())
}
