//! Engine configuration.
//!
//! All numeric thresholds the controller consults are externally supplied
//! here, never hardcoded at use sites. Defaults live in [`defaults`].

pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::errors::{GeodeResult, TaxonomyError};

/// Tunable thresholds for a single interview session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distinct confirming contexts required for High confidence.
    pub confirmations_for_high: usize,
    /// Hard ceiling on questions asked per session.
    pub max_questions: usize,
    /// Shift indicator occurrences that raise a potential's flag.
    pub shift_flag_threshold: usize,
    /// How many top-ranked Strength-row potentials the Confident stop
    /// rule examines.
    pub top_candidates: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confirmations_for_high: defaults::DEFAULT_CONFIRMATIONS_FOR_HIGH,
            max_questions: defaults::DEFAULT_MAX_QUESTIONS,
            shift_flag_threshold: defaults::DEFAULT_SHIFT_FLAG_THRESHOLD,
            top_candidates: defaults::DEFAULT_TOP_CANDIDATES,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> GeodeResult<Self> {
        let config: EngineConfig = toml::from_str(raw).map_err(|e| TaxonomyError::Parse {
            path: "<config>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no session could run under.
    pub fn validate(&self) -> GeodeResult<()> {
        if self.confirmations_for_high == 0 {
            return Err(TaxonomyError::InvalidValue {
                field: "confirmations_for_high".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.max_questions == 0 {
            return Err(TaxonomyError::InvalidValue {
                field: "max_questions".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.shift_flag_threshold == 0 {
            return Err(TaxonomyError::InvalidValue {
                field: "shift_flag_threshold".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.top_candidates == 0 {
            return Err(TaxonomyError::InvalidValue {
                field: "top_candidates".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
