//! # test-fixtures
//!
//! Shared fixtures for the workspace test suites: the gemstone
//! taxonomy with its five-block question bank, plus small builders for
//! hand-rolled signals.

use std::sync::Arc;

use geode_bank::ReferenceStore;
use geode_core::config::EngineConfig;
use geode_core::signal::{MarkerKind, Signal, SignalFragment};

/// The fixture reference data document.
pub fn reference_toml() -> &'static str {
    include_str!("../data/reference.toml")
}

/// A freshly loaded fixture store. Panics on a broken fixture, which is
/// exactly what a test should do.
pub fn store() -> ReferenceStore {
    geode_bank::load_str(reference_toml(), "<fixture>").expect("fixture reference data is valid")
}

/// The fixture store behind an `Arc`, ready for controllers.
pub fn store_arc() -> Arc<ReferenceStore> {
    Arc::new(store())
}

/// Default engine config used across tests.
pub fn config() -> EngineConfig {
    EngineConfig::default()
}

/// A signal supporting one potential.
pub fn supporting(question: &str, potential: &str, marker: MarkerKind) -> Signal {
    Signal::new(question).with_fragment(SignalFragment::supports(potential, marker))
}

/// A signal contradicting one potential.
pub fn contradicting(question: &str, potential: &str, marker: MarkerKind) -> Signal {
    Signal::new(question).with_fragment(SignalFragment::contradicts(potential, marker))
}

/// An empty (no-evidence) signal.
pub fn empty(question: &str) -> Signal {
    Signal::new(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geode_core::taxonomy::Row;

    #[test]
    fn fixture_loads_and_covers_the_matrix() {
        let store = store();
        assert_eq!(store.potentials().len(), 9);
        assert_eq!(store.potentials_in_row(Row::Strength).count(), 3);
        assert_eq!(store.blocks().len(), 5);
        assert!(store.question_count() >= 20);
    }
}
