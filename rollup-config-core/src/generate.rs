use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::base::base_config;
use crate::error::PreferenceError;
use crate::params::{ChainConfig, ParamChange};
use crate::preferences::{PreferenceRatios, UserPreferences};
use crate::rules::RULES;

/// How weights that fall outside the non-negative domain are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Every numeric input is accepted; negative weights flow straight into the ratios.
    #[default]
    Lenient,
    /// Negative or non-finite weights are rejected before generation.
    Strict,
}

impl WeightPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationReport {
    pub preferences: UserPreferences,
    pub ratios: PreferenceRatios,
    pub fired_rules: Vec<&'static str>,
    pub changes: Vec<ParamChange>,
    pub config: ChainConfig,
}

/// Adjusts the base parameter set to the given preference weights.
///
/// Total over its input: zero, negative and NaN weights all produce a config.
pub fn generate_config(prefs: &UserPreferences) -> ChainConfig {
    let ratios = prefs.ratios();
    let mut config = base_config();
    for rule in RULES.iter().filter(|rule| rule.fires(&ratios)) {
        rule.apply(&mut config);
    }
    config
}

pub fn generate_config_checked(
    prefs: &UserPreferences,
    policy: WeightPolicy,
) -> Result<ChainConfig, PreferenceError> {
    if policy == WeightPolicy::Strict {
        prefs.validate()?;
    }
    Ok(generate_config(prefs))
}

/// Same result as [`generate_config`], plus the ratios and rules that produced it.
pub fn generate_report(prefs: &UserPreferences) -> GenerationReport {
    let ratios = prefs.ratios();
    let base = base_config();
    let mut config = base;
    let mut fired_rules = Vec::new();
    for rule in RULES.iter().filter(|rule| rule.fires(&ratios)) {
        rule.apply(&mut config);
        fired_rules.push(rule.id);
    }

    GenerationReport {
        preferences: *prefs,
        ratios,
        fired_rules,
        changes: config.changes_from(&base),
        config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamKey;
    use crate::preferences::Axis;

    #[test]
    fn report_matches_plain_generation() {
        for prefs in [
            UserPreferences::new(60.0, 30.0, 10.0),
            UserPreferences::new(10.0, 70.0, 20.0),
            UserPreferences::new(10.0, 20.0, 70.0),
            UserPreferences::new(34.0, 33.0, 33.0),
            UserPreferences::new(60.0, 60.0, -40.0),
        ] {
            assert_eq!(generate_report(&prefs).config, generate_config(&prefs));
        }
    }

    #[test]
    fn report_lists_changes_against_base() {
        let report = generate_report(&UserPreferences::new(10.0, 20.0, 70.0));
        assert_eq!(report.fired_rules, ["security"]);
        assert_eq!(
            report.changes,
            [ParamChange {
                key: ParamKey::FinalizationPeriodSeconds,
                from: 2,
                to: 10
            }]
        );
    }

    #[test]
    fn later_rule_wins_on_shared_keys() {
        let report = generate_report(&UserPreferences::new(60.0, 60.0, -40.0));
        assert_eq!(report.fired_rules, ["gas-saving", "speed"]);
        assert_eq!(report.config.sequencer_window_size, 100);
        assert_eq!(report.config.max_sequencer_drift, 300);
        assert_eq!(report.config.gas_price_oracle_overhead, 2_000);
        assert_eq!(report.config.l2_output_oracle_submission_interval, 10);
        assert_eq!(report.config.l2_block_time, 1);
    }

    #[test]
    fn strict_policy_rejects_negative_weight() {
        let prefs = UserPreferences::new(-10.0, 0.0, 0.0);
        assert_eq!(
            generate_config_checked(&prefs, WeightPolicy::Strict),
            Err(PreferenceError::NegativeWeight {
                axis: Axis::GasSaving,
                value: -10.0
            })
        );
        assert_eq!(
            generate_config_checked(&prefs, WeightPolicy::Lenient),
            Ok(generate_config(&prefs))
        );
    }

    #[test]
    fn strict_policy_keeps_non_negative_results() {
        let prefs = UserPreferences::new(60.0, 30.0, 10.0);
        assert_eq!(
            generate_config_checked(&prefs, WeightPolicy::Strict),
            Ok(generate_config(&prefs))
        );
    }

    #[test]
    fn nan_weight_generates_base() {
        let prefs = UserPreferences::new(f64::NAN, 0.0, 0.0);
        assert_eq!(generate_config(&prefs), base_config());
        assert!(matches!(
            generate_config_checked(&prefs, WeightPolicy::Strict),
            Err(PreferenceError::NonFiniteWeight { .. })
        ));
    }
}
