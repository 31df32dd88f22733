use crate::constants::*;
use crate::params::ChainConfig;

const BASE_CONFIG: ChainConfig = ChainConfig {
    l2_block_time: BASE_L2_BLOCK_TIME,
    max_sequencer_drift: BASE_MAX_SEQUENCER_DRIFT,
    sequencer_window_size: BASE_SEQUENCER_WINDOW_SIZE,
    gas_price_oracle_overhead: BASE_GAS_PRICE_ORACLE_OVERHEAD,
    gas_price_oracle_scalar: BASE_GAS_PRICE_ORACLE_SCALAR,
    l2_output_oracle_submission_interval: BASE_L2_OUTPUT_ORACLE_SUBMISSION_INTERVAL,
    finalization_period_seconds: BASE_FINALIZATION_PERIOD_SECONDS,
};

/// Balanced default parameters. Every call returns its own copy.
///
/// Covers only the parameters the preference rules touch; a full rollup
/// deployment config carries many more.
pub fn base_config() -> ChainConfig {
    BASE_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamKey;

    #[test]
    fn returned_copies_are_independent() {
        let mut first = base_config();
        first.set(ParamKey::L2BlockTime, 12);

        assert_eq!(base_config().l2_block_time, 2);
        assert_ne!(first, base_config());
    }
}
