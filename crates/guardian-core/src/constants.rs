/// Guardian system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of maturity levels in the Bayesian model.
pub const MATURITY_LEVEL_COUNT: usize = 5;

/// Lowest QCMEA maturity tier.
pub const QCMEA_MIN_LEVEL: u8 = 1;

/// Highest QCMEA maturity tier.
pub const QCMEA_MAX_LEVEL: u8 = 5;

/// Metadata fields the correction-learning loop mines patterns for.
pub const LEARNABLE_FIELDS: [&str; 4] = ["title", "author", "organization", "topic"];

/// Tolerance used when checking that a probability distribution sums to one.
pub const PROBABILITY_EPSILON: f64 = 1e-6;
