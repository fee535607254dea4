//! The append-only evidence ledger.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use geode_core::errors::{GeodeResult, ProtocolError};
use geode_core::signal::{MarkerKind, Polarity};
use geode_core::taxonomy::{BlockId, PotentialId, QuestionId};

/// One recorded piece of evidence: a signal fragment plus its recording
/// context (where it came from and when, in ledger order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedFragment {
    /// Position in the session-wide recording order. Later fragments can
    /// negate or explain earlier ones, so order is load-bearing.
    pub seq: u64,
    pub question: QuestionId,
    /// The question-context (block) this evidence came from. Distinct
    /// blocks are what "distinct contexts" counts.
    pub block: BlockId,
    pub marker: MarkerKind,
    pub polarity: Polarity,
    /// Whether the source question carries a shift-resolving purpose
    /// (contrast or childhood). Such fragments can explain an earlier
    /// contradiction.
    pub resolving: bool,
}

/// Per-session evidence accumulator. Strictly single-writer and purely
/// additive: fragments are appended, never rewritten or deleted.
#[derive(Debug, Clone)]
pub struct EvidenceLedger {
    known: FxHashSet<PotentialId>,
    entries: FxHashMap<PotentialId, Vec<RecordedFragment>>,
    next_seq: u64,
}

impl EvidenceLedger {
    /// A ledger that accepts evidence for exactly the given potentials.
    pub fn new(known: impl IntoIterator<Item = PotentialId>) -> Self {
        Self {
            known: known.into_iter().collect(),
            entries: FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Append one fragment. Referencing an unknown potential is a
    /// protocol violation — a caller/config bug, not a runtime condition.
    /// Returns the assigned sequence number.
    pub fn record(
        &mut self,
        potential: &PotentialId,
        question: &QuestionId,
        block: &BlockId,
        marker: MarkerKind,
        polarity: Polarity,
        resolving: bool,
    ) -> GeodeResult<u64> {
        if !self.known.contains(potential) {
            return Err(ProtocolError::UnknownPotential {
                potential: potential.to_string(),
            }
            .into());
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        debug!(potential = %potential, seq, "evidence fragment recorded");
        self.entries
            .entry(potential.clone())
            .or_default()
            .push(RecordedFragment {
                seq,
                question: question.clone(),
                block: block.clone(),
                marker,
                polarity,
                resolving,
            });
        Ok(seq)
    }

    /// Whether this ledger accepts evidence for the given potential.
    pub fn knows(&self, potential: &PotentialId) -> bool {
        self.known.contains(potential)
    }

    /// All fragments recorded for a potential, in recording order.
    pub fn fragments(&self, potential: &PotentialId) -> &[RecordedFragment] {
        self.entries.get(potential).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct blocks that produced *supporting* evidence for
    /// a potential. Contradicting fragments never add contexts.
    pub fn context_count(&self, potential: &PotentialId) -> usize {
        self.fragments(potential)
            .iter()
            .filter(|f| f.polarity == Polarity::Supports)
            .map(|f| &f.block)
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// The set of marker kinds observed in supporting evidence for a
    /// potential.
    pub fn marker_types(&self, potential: &PotentialId) -> BTreeSet<MarkerKind> {
        self.fragments(potential)
            .iter()
            .filter(|f| f.polarity == Polarity::Supports)
            .map(|f| f.marker)
            .collect()
    }

    /// The distinct blocks that produced supporting evidence, sorted.
    pub fn support_blocks(&self, potential: &PotentialId) -> Vec<&BlockId> {
        let mut blocks: Vec<&BlockId> = self
            .fragments(potential)
            .iter()
            .filter(|f| f.polarity == Polarity::Supports)
            .map(|f| &f.block)
            .collect();
        blocks.sort();
        blocks.dedup();
        blocks
    }

    /// Sequence number of the most recent supporting fragment, if any.
    /// Used as the evidence-recency tie-break.
    pub fn last_support_seq(&self, potential: &PotentialId) -> Option<u64> {
        self.fragments(potential)
            .iter()
            .filter(|f| f.polarity == Polarity::Supports)
            .map(|f| f.seq)
            .max()
    }

    /// The next sequence number that will be assigned. Also the total
    /// number of fragments recorded so far.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    pub fn is_empty(&self) -> bool {
        self.next_seq == 0
    }

    /// Potentials with at least one recorded fragment, in id order.
    pub fn potentials_with_evidence(&self) -> Vec<&PotentialId> {
        let mut ids: Vec<&PotentialId> = self
            .entries
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k)
            .collect();
        ids.sort();
        ids
    }
}
