use anyhow::{anyhow, Result};
use rollup_config_core::rules::rule_by_id;
use rollup_config_core::{
    generate_config_checked, generate_report, AdjustmentRule, GenerationReport, ParamKey,
    UserPreferences, WeightPolicy, RULES,
};

/// Runs one generation under `policy`.
///
/// Strict runs fail on negative or non-finite weights. Lenient runs go ahead and
/// log a warning for anything outside the nominal `0..=100` range.
pub fn run_generate(prefs: &UserPreferences, policy: WeightPolicy) -> Result<GenerationReport> {
    let config = generate_config_checked(prefs, policy)
        .map_err(|err| anyhow!("rejected by strict weight policy: {err}"))?;
    if policy == WeightPolicy::Lenient {
        if let Err(err) = prefs.validate() {
            tracing::warn!("{err}; generating anyway (lenient policy)");
        }
    }
    for axis in prefs.out_of_range_axes() {
        tracing::warn!(
            axis = axis.as_str(),
            weight = prefs.weight(axis),
            "weight outside the nominal 0..=100 range"
        );
    }

    let report = generate_report(prefs);
    debug_assert_eq!(report.config, config);
    tracing::debug!(
        policy = policy.as_str(),
        divisor = report.ratios.divisor,
        rules = ?report.fired_rules,
        fingerprint = %report.config.fingerprint_hex(),
        "generated chain config"
    );
    Ok(report)
}

/// Rules to list, narrowed by rule id and/or by a parameter they override.
pub fn select_rules(
    id: Option<&str>,
    key: Option<&str>,
) -> Result<Vec<&'static AdjustmentRule>> {
    let mut rules: Vec<&'static AdjustmentRule> = match id {
        Some(id) => {
            let rule = rule_by_id(id).ok_or_else(|| {
                let available: Vec<&str> = RULES.iter().map(|rule| rule.id).collect();
                anyhow!("unknown rule '{id}'. available: {}", available.join(", "))
            })?;
            vec![rule]
        }
        None => RULES.iter().collect(),
    };
    if let Some(name) = key {
        let key: ParamKey = name.parse()?;
        rules.retain(|rule| rule.overrides_key(key));
    }
    Ok(rules)
}
