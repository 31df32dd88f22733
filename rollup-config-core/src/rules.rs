use crate::constants::*;
use crate::params::{ChainConfig, ParamKey};
use crate::preferences::{Axis, PreferenceRatios};

/// A guarded set of parameter overrides tied to one preference axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdjustmentRule {
    pub id: &'static str,
    pub axis: Axis,
    pub description: &'static str,
    pub overrides: &'static [(ParamKey, u64)],
}

impl AdjustmentRule {
    /// Strictly above the threshold; a ratio of exactly 0.5 does not fire.
    pub fn fires(&self, ratios: &PreferenceRatios) -> bool {
        ratios.exceeds_threshold(self.axis)
    }

    pub fn apply(&self, config: &mut ChainConfig) {
        for &(key, value) in self.overrides {
            config.set(key, value);
        }
    }

    pub fn overrides_key(&self, key: ParamKey) -> bool {
        self.overrides.iter().any(|(k, _)| *k == key)
    }
}

/// Applied in this order. When several fire, later rules win on shared keys.
pub static RULES: [AdjustmentRule; 3] = [
    AdjustmentRule {
        id: "gas-saving",
        axis: Axis::GasSaving,
        description: "widen the sequencing window and batch output submissions",
        overrides: &[
            (ParamKey::SequencerWindowSize, GAS_SEQUENCER_WINDOW_SIZE),
            (ParamKey::MaxSequencerDrift, GAS_MAX_SEQUENCER_DRIFT),
            (ParamKey::GasPriceOracleOverhead, GAS_GAS_PRICE_ORACLE_OVERHEAD),
            (
                ParamKey::L2OutputOracleSubmissionInterval,
                GAS_L2_OUTPUT_ORACLE_SUBMISSION_INTERVAL,
            ),
        ],
    },
    AdjustmentRule {
        id: "speed",
        axis: Axis::Speed,
        description: "1s blocks with a tight sequencing window",
        overrides: &[
            (ParamKey::L2BlockTime, SPEED_L2_BLOCK_TIME),
            (ParamKey::SequencerWindowSize, SPEED_SEQUENCER_WINDOW_SIZE),
            (ParamKey::MaxSequencerDrift, SPEED_MAX_SEQUENCER_DRIFT),
            (ParamKey::GasPriceOracleOverhead, SPEED_GAS_PRICE_ORACLE_OVERHEAD),
            (
                ParamKey::L2OutputOracleSubmissionInterval,
                SPEED_L2_OUTPUT_ORACLE_SUBMISSION_INTERVAL,
            ),
        ],
    },
    AdjustmentRule {
        id: "security",
        axis: Axis::Security,
        description: "lengthen the finalization period",
        overrides: &[(
            ParamKey::FinalizationPeriodSeconds,
            SECURITY_FINALIZATION_PERIOD_SECONDS,
        )],
    },
];

pub fn rule_by_id(id: &str) -> Option<&'static AdjustmentRule> {
    RULES.iter().find(|rule| rule.id == id)
}
