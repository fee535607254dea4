//! Raw serde shapes for reference data TOML documents.
//!
//! A document looks like:
//!
//! ```toml
//! [[potentials]]
//! id = "citrine"
//! name = "Citrine"
//! row = "strength"
//! column = "material"
//!
//! [[questions]]
//! id = "now.easy_tasks"
//! block = "B"
//! index = 1
//! text = "Which tasks come to you easily, as if by themselves?"
//! purposes = ["clarification"]
//! potentials = ["citrine", "amethyst"]
//!
//! [[indicators]]
//! id = "obligation_language"
//! description = "Answers framed as duty rather than desire"
//! tags = ["have to", "must", "supposed to"]
//! ```

use serde::Deserialize;

use geode_core::taxonomy::{Column, Purpose, ResponseKind, Row};

/// A complete reference data document, prior to validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReference {
    #[serde(default)]
    pub potentials: Vec<RawPotential>,
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
    #[serde(default)]
    pub indicators: Vec<RawIndicator>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPotential {
    pub id: String,
    pub name: String,
    pub row: Row,
    pub column: Column,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub id: String,
    pub block: String,
    pub index: u32,
    pub text: String,
    pub purposes: Vec<Purpose>,
    #[serde(default)]
    pub potentials: Vec<String>,
    #[serde(default)]
    pub kind: ResponseKind,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawIndicator {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
