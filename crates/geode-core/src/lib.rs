//! # geode-core
//!
//! Core types for the Geode adaptive interview engine: the potential
//! taxonomy, the question model, the signal/evidence model, shared
//! engine models, configuration, errors, and tracing setup.
//!
//! ## Modules
//!
//! - `taxonomy` — rows, columns, potentials, questions, shift indicators
//! - `signal` — structured extraction from one answered question
//! - `models` — confidence tiers, shift resolutions, stop reasons, session events
//! - `config` — `EngineConfig` with centralized defaults
//! - `errors` — per-class error enums and `GeodeResult`
//! - `traits` — the `AnswerInterpreter` capability
//! - `tracing` — `GEODE_LOG` subscriber initialization

pub mod config;
pub mod errors;
pub mod models;
pub mod signal;
pub mod taxonomy;
pub mod tracing;
pub mod traits;

pub use config::EngineConfig;
pub use errors::{GeodeError, GeodeResult, ProtocolError, TaxonomyError};
pub use models::{SessionEvent, SessionEventKind, ShiftResolution, StopReason, Tier};
pub use signal::{MarkerKind, Polarity, Signal, SignalFragment};
pub use taxonomy::{
    BlockId, Cell, Column, IndicatorId, Potential, PotentialId, Purpose, Question, QuestionId,
    ResponseKind, Row, ShiftIndicator,
};
pub use traits::AnswerInterpreter;
