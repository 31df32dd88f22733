/// A ratio must be strictly greater than this to trigger its axis rule.
pub const RATIO_THRESHOLD: f64 = 0.5;

/// Nominal weight bounds. Only used for reporting; never enforced on generation.
pub const WEIGHT_MIN: f64 = 0.0;
pub const WEIGHT_MAX: f64 = 100.0;

/// Fixed-point unit for `gasPriceOracleScalar` (1.0 == 1_000_000).
pub const GAS_PRICE_ORACLE_SCALAR_UNIT: u64 = 1_000_000;

// Balanced starting point.
pub const BASE_L2_BLOCK_TIME: u64 = 2;
pub const BASE_MAX_SEQUENCER_DRIFT: u64 = 300;
pub const BASE_SEQUENCER_WINDOW_SIZE: u64 = 200;
pub const BASE_GAS_PRICE_ORACLE_OVERHEAD: u64 = 2_100;
pub const BASE_GAS_PRICE_ORACLE_SCALAR: u64 = GAS_PRICE_ORACLE_SCALAR_UNIT;
pub const BASE_L2_OUTPUT_ORACLE_SUBMISSION_INTERVAL: u64 = 10;
pub const BASE_FINALIZATION_PERIOD_SECONDS: u64 = 2;

// Gas-saving profile: wider sequencing window, fewer output submissions.
pub const GAS_SEQUENCER_WINDOW_SIZE: u64 = 360;
pub const GAS_MAX_SEQUENCER_DRIFT: u64 = 600;
pub const GAS_GAS_PRICE_ORACLE_OVERHEAD: u64 = 1_500;
pub const GAS_L2_OUTPUT_ORACLE_SUBMISSION_INTERVAL: u64 = 60;

// Speed profile: 1s blocks, tight window. Overhead stays high to keep sequencer revenue.
pub const SPEED_L2_BLOCK_TIME: u64 = 1;
pub const SPEED_SEQUENCER_WINDOW_SIZE: u64 = 100;
pub const SPEED_MAX_SEQUENCER_DRIFT: u64 = 300;
pub const SPEED_GAS_PRICE_ORACLE_OVERHEAD: u64 = 2_000;
pub const SPEED_L2_OUTPUT_ORACLE_SUBMISSION_INTERVAL: u64 = 10;

// Security profile.
pub const SECURITY_FINALIZATION_PERIOD_SECONDS: u64 = 10;
