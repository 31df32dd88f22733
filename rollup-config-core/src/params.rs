use alloc::{string::String, vec::Vec};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ParamKeyError;

const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamKey {
    L2BlockTime,
    MaxSequencerDrift,
    SequencerWindowSize,
    GasPriceOracleOverhead,
    GasPriceOracleScalar,
    L2OutputOracleSubmissionInterval,
    FinalizationPeriodSeconds,
}

impl ParamKey {
    /// Every key, in serialization order.
    pub const ALL: [ParamKey; 7] = [
        Self::L2BlockTime,
        Self::MaxSequencerDrift,
        Self::SequencerWindowSize,
        Self::GasPriceOracleOverhead,
        Self::GasPriceOracleScalar,
        Self::L2OutputOracleSubmissionInterval,
        Self::FinalizationPeriodSeconds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::L2BlockTime => "l2BlockTime",
            Self::MaxSequencerDrift => "maxSequencerDrift",
            Self::SequencerWindowSize => "sequencerWindowSize",
            Self::GasPriceOracleOverhead => "gasPriceOracleOverhead",
            Self::GasPriceOracleScalar => "gasPriceOracleScalar",
            Self::L2OutputOracleSubmissionInterval => "l2OutputOracleSubmissionInterval",
            Self::FinalizationPeriodSeconds => "finalizationPeriodSeconds",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::L2BlockTime | Self::MaxSequencerDrift | Self::FinalizationPeriodSeconds => {
                "seconds"
            }
            Self::SequencerWindowSize => "l1 blocks",
            Self::L2OutputOracleSubmissionInterval => "l2 blocks",
            Self::GasPriceOracleOverhead => "gas",
            Self::GasPriceOracleScalar => "fixed-point 1e6",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamKey {
    type Err = ParamKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| ParamKeyError::Unknown {
                name: String::from(name),
            })
    }
}

/// Rollup chain parameters. One field per [`ParamKey`], so the key set can't drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChainConfig {
    pub l2_block_time: u64,
    pub max_sequencer_drift: u64,
    pub sequencer_window_size: u64,
    pub gas_price_oracle_overhead: u64,
    pub gas_price_oracle_scalar: u64,
    pub l2_output_oracle_submission_interval: u64,
    pub finalization_period_seconds: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamChange {
    pub key: ParamKey,
    pub from: u64,
    pub to: u64,
}

impl ChainConfig {
    pub fn get(&self, key: ParamKey) -> u64 {
        match key {
            ParamKey::L2BlockTime => self.l2_block_time,
            ParamKey::MaxSequencerDrift => self.max_sequencer_drift,
            ParamKey::SequencerWindowSize => self.sequencer_window_size,
            ParamKey::GasPriceOracleOverhead => self.gas_price_oracle_overhead,
            ParamKey::GasPriceOracleScalar => self.gas_price_oracle_scalar,
            ParamKey::L2OutputOracleSubmissionInterval => {
                self.l2_output_oracle_submission_interval
            }
            ParamKey::FinalizationPeriodSeconds => self.finalization_period_seconds,
        }
    }

    pub fn set(&mut self, key: ParamKey, value: u64) {
        let slot = match key {
            ParamKey::L2BlockTime => &mut self.l2_block_time,
            ParamKey::MaxSequencerDrift => &mut self.max_sequencer_drift,
            ParamKey::SequencerWindowSize => &mut self.sequencer_window_size,
            ParamKey::GasPriceOracleOverhead => &mut self.gas_price_oracle_overhead,
            ParamKey::GasPriceOracleScalar => &mut self.gas_price_oracle_scalar,
            ParamKey::L2OutputOracleSubmissionInterval => {
                &mut self.l2_output_oracle_submission_interval
            }
            ParamKey::FinalizationPeriodSeconds => &mut self.finalization_period_seconds,
        };
        *slot = value;
    }

    /// `(key, value)` pairs in [`ParamKey::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (ParamKey, u64)> + '_ {
        ParamKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Keys whose value differs from `before`, with both values.
    pub fn changes_from(&self, before: &ChainConfig) -> Vec<ParamChange> {
        self.entries()
            .filter_map(|(key, to)| {
                let from = before.get(key);
                (from != to).then_some(ParamChange { key, from, to })
            })
            .collect()
    }

    /// FNV-1a over key names and little-endian values.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = FNV_OFFSET_BASIS;
        for (key, value) in self.entries() {
            for byte in key.as_str().bytes().chain(value.to_le_bytes()) {
                hash ^= byte as u64;
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        hash
    }

    pub fn fingerprint_hex(&self) -> String {
        alloc::format!("fnv1a:{:016x}", self.fingerprint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::base_config;

    #[test]
    fn key_names_parse_back() {
        for key in ParamKey::ALL {
            assert_eq!(key.as_str().parse::<ParamKey>(), Ok(key));
        }
    }

    #[test]
    fn rejects_unknown_key_name() {
        assert_eq!(
            "l1BlockTime".parse::<ParamKey>(),
            Err(ParamKeyError::Unknown {
                name: String::from("l1BlockTime")
            })
        );
    }

    #[test]
    fn set_only_touches_named_key() {
        let base = base_config();
        let mut config = base;
        config.set(ParamKey::SequencerWindowSize, 999);

        let changes = config.changes_from(&base);
        assert_eq!(
            changes,
            [ParamChange {
                key: ParamKey::SequencerWindowSize,
                from: 200,
                to: 999
            }]
        );
    }

    #[test]
    fn entries_follow_key_order() {
        let keys: Vec<ParamKey> = base_config().entries().map(|(key, _)| key).collect();
        assert_eq!(keys, ParamKey::ALL);
    }

    #[test]
    fn fingerprint_tracks_values() {
        let base = base_config();
        let mut changed = base;
        changed.set(ParamKey::FinalizationPeriodSeconds, 10);

        assert_eq!(base.fingerprint(), base_config().fingerprint());
        assert_ne!(base.fingerprint(), changed.fingerprint());
        assert!(base.fingerprint_hex().starts_with("fnv1a:"));
        assert_eq!(base.fingerprint_hex().len(), "fnv1a:".len() + 16);
    }
}
