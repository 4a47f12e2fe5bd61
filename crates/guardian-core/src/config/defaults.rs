// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_CONTENT_PREFIX_CHARS: usize = 3_000;
pub const DEFAULT_MIN_ANALYZABLE_CHARS: usize = 40;

// --- Learning ---
pub const DEFAULT_CONTENT_SAMPLE_CHARS: usize = 2_000;
pub const DEFAULT_MIN_PATTERN_CONFIDENCE: f64 = 0.7;
pub const DEFAULT_TRIGGER_MATCH_RATIO: f64 = 0.6;
pub const DEFAULT_MAX_PATTERNS: usize = 5_000;
pub const DEFAULT_CONFIRM_BOOST: f64 = 0.05;
pub const DEFAULT_REJECT_PENALTY: f64 = 0.15;

// --- Optimizer ---
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;
pub const DEFAULT_MAX_STATES: usize = 10_000;

// --- Storage ---
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
