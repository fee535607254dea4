//! # geode-evidence
//!
//! The evidence side of the interview engine: an append-only ledger of
//! signal fragments per potential, contradiction analysis over it, the
//! pure confidence model, and the shift flag registry.
//!
//! Evidence is never discarded — only appended, annotated, and
//! reweighted. A session is fully replayable from its ledger alone.
//!
//! ## Modules
//!
//! - `ledger` — append-only `EvidenceLedger`
//! - `contradiction` — later-negates-earlier and childhood-dominance analysis
//! - `confidence` — pure tier computation with shift adjustment
//! - `shift` — `ShiftRegistry`: indicator occurrences and resolutions

pub mod confidence;
pub mod contradiction;
pub mod ledger;
pub mod shift;

pub use confidence::{assess, tier, TierAssessment};
pub use ledger::{EvidenceLedger, RecordedFragment};
pub use shift::{classify_resolution, ResolutionRecord, ShiftOccurrence, ShiftRegistry, ShiftState};
