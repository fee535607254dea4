//! Error types, one enum per error class.
//!
//! Two fatal classes per the engine's failure model: taxonomy/config
//! errors (bad reference data or thresholds, caught at load time) and
//! protocol errors (caller bugs at the session boundary). Evidence gaps
//! — empty signals — are not errors at all.

pub mod protocol_error;
pub mod taxonomy_error;

pub use protocol_error::ProtocolError;
pub use taxonomy_error::TaxonomyError;

/// Top-level error for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum GeodeError {
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Result alias used across the workspace.
pub type GeodeResult<T> = Result<T, GeodeError>;
