//! Typed identifier newtypes for reference data.
//!
//! Each ID type wraps a `String` to prevent cross-type confusion: a
//! `QuestionId` cannot be accidentally used where a `PotentialId` is
//! expected. IDs come from reference data only — the engine never mints
//! them.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new ID from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw ID string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

define_id!(
    /// Potential identifier (e.g. `"citrine"`).
    PotentialId
);

define_id!(
    /// Question identifier (e.g. `"now.easy_tasks"`).
    QuestionId
);

define_id!(
    /// Shift indicator identifier (e.g. `"obligation_language"`).
    IndicatorId
);

/// Question block identifier — a single uppercase letter.
///
/// Blocks group questions by diagnostic context (intake, present,
/// childhood, behavior, validation). The block letter participates in the
/// deterministic selection tie-break, so `BlockId` ordering is the
/// lexicographic letter ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    /// Create a block ID. Validity (single uppercase ASCII letter) is
    /// enforced by the reference data loader.
    pub fn new(letter: impl Into<String>) -> Self {
        Self(letter.into())
    }

    /// The raw block letter.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a well-formed block letter.
    pub fn is_valid(&self) -> bool {
        self.0.len() == 1 && self.0.chars().all(|c| c.is_ascii_uppercase())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(letter: &str) -> Self {
        Self(letter.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_letter_validity() {
        assert!(BlockId::new("A").is_valid());
        assert!(BlockId::new("Z").is_valid());
        assert!(!BlockId::new("a").is_valid());
        assert!(!BlockId::new("AB").is_valid());
        assert!(!BlockId::new("").is_valid());
    }

    #[test]
    fn block_ordering_is_lexicographic() {
        assert!(BlockId::new("A") < BlockId::new("B"));
        assert!(BlockId::new("B") < BlockId::new("E"));
    }
}
