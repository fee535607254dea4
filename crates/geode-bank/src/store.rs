//! The indexed, immutable reference store.

use rustc_hash::FxHashMap;

use geode_core::errors::{GeodeResult, ProtocolError};
use geode_core::taxonomy::{
    BlockId, IndicatorId, Potential, PotentialId, Question, QuestionId, Row, ShiftIndicator,
};

/// Indexed reference data, shared read-only across sessions (wrap in
/// `Arc`). Iteration orders are deterministic: potentials by id,
/// questions by (block letter, index), blocks by letter.
#[derive(Debug)]
pub struct ReferenceStore {
    potentials: Vec<Potential>,
    potential_index: FxHashMap<PotentialId, usize>,
    questions: Vec<Question>,
    question_index: FxHashMap<QuestionId, usize>,
    block_index: FxHashMap<BlockId, Vec<usize>>,
    blocks: Vec<BlockId>,
    indicators: Vec<ShiftIndicator>,
    indicator_index: FxHashMap<IndicatorId, usize>,
}

impl ReferenceStore {
    /// Build the store from validated parts. Callers go through the
    /// loader, which validates first.
    pub(crate) fn build(
        mut potentials: Vec<Potential>,
        mut questions: Vec<Question>,
        indicators: Vec<ShiftIndicator>,
    ) -> Self {
        potentials.sort_by(|a, b| a.id.cmp(&b.id));
        questions.sort_by(|a, b| (&a.block, a.index).cmp(&(&b.block, b.index)));

        let potential_index = potentials
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        let question_index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();

        let mut block_index: FxHashMap<BlockId, Vec<usize>> = FxHashMap::default();
        for (i, question) in questions.iter().enumerate() {
            block_index.entry(question.block.clone()).or_default().push(i);
        }
        let mut blocks: Vec<BlockId> = block_index.keys().cloned().collect();
        blocks.sort();

        let indicator_index = indicators
            .iter()
            .enumerate()
            .map(|(i, ind)| (ind.id.clone(), i))
            .collect();

        Self {
            potentials,
            potential_index,
            questions,
            question_index,
            block_index,
            blocks,
            indicators,
            indicator_index,
        }
    }

    // --- Potentials ---

    pub fn potential(&self, id: &PotentialId) -> Option<&Potential> {
        self.potential_index.get(id).map(|&i| &self.potentials[i])
    }

    /// Lookup that treats an unknown id as a protocol violation.
    pub fn require_potential(&self, id: &PotentialId) -> GeodeResult<&Potential> {
        self.potential(id).ok_or_else(|| {
            ProtocolError::UnknownPotential {
                potential: id.to_string(),
            }
            .into()
        })
    }

    /// All 9 potentials, ordered by id.
    pub fn potentials(&self) -> &[Potential] {
        &self.potentials
    }

    /// Potentials in a given energy row, in id order.
    pub fn potentials_in_row(&self, row: Row) -> impl Iterator<Item = &Potential> {
        self.potentials.iter().filter(move |p| p.row() == row)
    }

    pub fn knows_potential(&self, id: &PotentialId) -> bool {
        self.potential_index.contains_key(id)
    }

    // --- Questions ---

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.question_index.get(id).map(|&i| &self.questions[i])
    }

    /// Lookup that treats an unknown id as a protocol violation.
    pub fn require_question(&self, id: &QuestionId) -> GeodeResult<&Question> {
        self.question(id).ok_or_else(|| {
            ProtocolError::UnknownQuestion {
                question: id.to_string(),
            }
            .into()
        })
    }

    /// The whole bank in (block, index) order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions of one block, in index order.
    pub fn block_questions(&self, block: &BlockId) -> impl Iterator<Item = &Question> {
        self.block_index
            .get(block)
            .into_iter()
            .flatten()
            .map(|&i| &self.questions[i])
    }

    /// All block letters, sorted.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    // --- Indicators ---

    pub fn indicator(&self, id: &IndicatorId) -> Option<&ShiftIndicator> {
        self.indicator_index.get(id).map(|&i| &self.indicators[i])
    }

    pub fn indicators(&self) -> &[ShiftIndicator] {
        &self.indicators
    }
}
