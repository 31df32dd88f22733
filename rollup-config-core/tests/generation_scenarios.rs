use std::collections::BTreeSet;

use rollup_config_core::{
    base_config, generate_config, generate_config_checked, generate_report, ChainConfig,
    ParamKey, UserPreferences, WeightPolicy,
};

fn generate(gas: f64, speed: f64, security: f64) -> ChainConfig {
    generate_config(&UserPreferences::new(gas, speed, security))
}

fn json_keys(config: &ChainConfig) -> BTreeSet<String> {
    let value = serde_json::to_value(config).expect("config should serialize");
    value
        .as_object()
        .expect("config should serialize as an object")
        .keys()
        .cloned()
        .collect()
}

#[test]
fn gas_dominant_preferences() {
    assert_eq!(
        generate(60.0, 30.0, 10.0),
        ChainConfig {
            l2_block_time: 2,
            max_sequencer_drift: 600,
            sequencer_window_size: 360,
            gas_price_oracle_overhead: 1_500,
            gas_price_oracle_scalar: 1_000_000,
            l2_output_oracle_submission_interval: 60,
            finalization_period_seconds: 2,
        }
    );
}

#[test]
fn speed_dominant_preferences() {
    assert_eq!(
        generate(10.0, 70.0, 20.0),
        ChainConfig {
            l2_block_time: 1,
            max_sequencer_drift: 300,
            sequencer_window_size: 100,
            gas_price_oracle_overhead: 2_000,
            gas_price_oracle_scalar: 1_000_000,
            l2_output_oracle_submission_interval: 10,
            finalization_period_seconds: 2,
        }
    );
}

#[test]
fn security_dominant_preferences() {
    let mut expected = base_config();
    expected.finalization_period_seconds = 10;
    assert_eq!(generate(10.0, 20.0, 70.0), expected);
}

#[test]
fn no_majority_keeps_base() {
    assert_eq!(generate(34.0, 33.0, 33.0), base_config());
    assert_eq!(generate(50.0, 50.0, 0.0), base_config());
}

#[test]
fn zero_weights_keep_base() {
    assert_eq!(generate(0.0, 0.0, 0.0), base_config());
}

#[test]
fn generation_is_deterministic() {
    for (gas, speed, security) in [(60.0, 30.0, 10.0), (1.5, 97.0, 0.25), (-3.0, 2.0, 9.0)] {
        assert_eq!(
            generate(gas, speed, security),
            generate(gas, speed, security)
        );
    }
}

#[test]
fn output_keys_match_base_keys() {
    let base_keys = json_keys(&base_config());
    let expected: BTreeSet<String> = ParamKey::ALL
        .iter()
        .map(|key| key.as_str().to_string())
        .collect();
    assert_eq!(base_keys, expected);

    for (gas, speed, security) in [
        (60.0, 30.0, 10.0),
        (10.0, 70.0, 20.0),
        (10.0, 20.0, 70.0),
        (60.0, 60.0, -40.0),
        (0.0, 0.0, 0.0),
    ] {
        assert_eq!(json_keys(&generate(gas, speed, security)), base_keys);
    }
}

#[test]
fn negative_weight_fires_gas_rule_when_lenient() {
    let prefs = UserPreferences::new(-10.0, 0.0, 0.0);
    let report = generate_report(&prefs);
    assert_eq!(report.ratios.divisor, -10.0);
    assert_eq!(report.ratios.gas_saving, 1.0);
    assert_eq!(report.fired_rules, ["gas-saving"]);
    assert_eq!(report.config, generate(60.0, 30.0, 10.0));

    assert!(generate_config_checked(&prefs, WeightPolicy::Strict).is_err());
}

#[test]
fn serialized_config_uses_camel_case_keys_in_order() {
    let encoded = serde_json::to_string(&generate(60.0, 30.0, 10.0)).unwrap();
    assert_eq!(
        encoded,
        r#"{"l2BlockTime":2,"maxSequencerDrift":600,"sequencerWindowSize":360,"gasPriceOracleOverhead":1500,"gasPriceOracleScalar":1000000,"l2OutputOracleSubmissionInterval":60,"finalizationPeriodSeconds":2}"#
    );
}

#[test]
fn deserialize_requires_exact_key_set() {
    let missing = r#"{"l2BlockTime":2,"maxSequencerDrift":300}"#;
    assert!(serde_json::from_str::<ChainConfig>(missing).is_err());

    let mut value = serde_json::to_value(base_config()).unwrap();
    value
        .as_object_mut()
        .unwrap()
        .insert("l1ChainId".to_string(), serde_json::json!(1));
    assert!(serde_json::from_value::<ChainConfig>(value).is_err());

    let roundtrip: ChainConfig =
        serde_json::from_value(serde_json::to_value(base_config()).unwrap()).unwrap();
    assert_eq!(roundtrip, base_config());
}
