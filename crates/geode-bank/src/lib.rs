//! # geode-bank
//!
//! The reference data store: immutable load of the potential taxonomy,
//! the question bank, and the shift indicator set.
//!
//! Data arrives as TOML, is validated once at startup (malformed or
//! incomplete taxonomy data is fatal), and is indexed for lookup by id
//! and by block. After load the store never changes — the "no invented
//! questions" invariant is structural, not conventional.
//!
//! ## Modules
//!
//! - `schema` — raw serde document shapes
//! - `validate` — startup-fatal integrity checks
//! - `loader` — TOML parsing entry points
//! - `store` — the indexed, immutable `ReferenceStore`

pub mod loader;
pub mod schema;
pub mod store;
pub mod validate;

pub use loader::{load_path, load_str};
pub use store::ReferenceStore;
