// Single source of truth for all default values.

// --- Confidence ---
pub const DEFAULT_CONFIRMATIONS_FOR_HIGH: usize = 2;

// --- Session ---
pub const DEFAULT_MAX_QUESTIONS: usize = 30;

// --- Shifts ---
pub const DEFAULT_SHIFT_FLAG_THRESHOLD: usize = 1;

// --- Stop conditions ---
pub const DEFAULT_TOP_CANDIDATES: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "geode=info";
pub const LOG_ENV_VAR: &str = "GEODE_LOG";
