//! Reference data and configuration errors — fatal at load time.

/// Errors raised while loading or validating reference data and engine
/// configuration. Never recovered: a session must not start on a broken
/// taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("reference data file not found: {path}")]
    FileNotFound { path: String },

    #[error("reference data parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("expected {expected} potentials, found {found}")]
    PotentialCount { expected: usize, found: usize },

    #[error("matrix cell {cell} is claimed by both {first} and {second}")]
    CellConflict {
        cell: String,
        first: String,
        second: String,
    },

    #[error("question {question} references unknown potential {potential}")]
    UnknownPotentialRef { question: String, potential: String },

    #[error("question {question} has empty text")]
    EmptyQuestionText { question: String },

    #[error("question {question} declares no purpose")]
    NoPurposes { question: String },

    #[error("question {question} has invalid block {block}: expected a single uppercase letter")]
    InvalidBlock { question: String, block: String },

    #[error("questions {first} and {second} share position {block}.{index}")]
    DuplicatePosition {
        first: String,
        second: String,
        block: String,
        index: u32,
    },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
