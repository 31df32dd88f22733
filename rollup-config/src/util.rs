use anyhow::{anyhow, Context, Result};
use rollup_config_core::UserPreferences;
use std::fs;
use std::path::Path;

pub fn parse_weight(weight: &str) -> Result<f64> {
    let s = weight.trim();
    if s.is_empty() {
        return Err(anyhow!("empty weight"));
    }
    s.parse::<f64>()
        .with_context(|| format!("invalid weight: {s}"))
}

/// Parses `gas,speed,security`.
pub fn parse_weight_csv(input: &str) -> Result<UserPreferences> {
    let weights = input
        .split(',')
        .map(parse_weight)
        .collect::<Result<Vec<f64>>>()?;
    match weights.as_slice() {
        [gas, speed, security] => Ok(UserPreferences::new(*gas, *speed, *security)),
        _ => Err(anyhow!(
            "expected 3 weights (gas,speed,security), got {}: {input}",
            weights.len()
        )),
    }
}

pub fn load_preferences(path: &Path) -> Result<UserPreferences> {
    let data = fs::read(path)
        .with_context(|| format!("failed reading preferences file {}", path.display()))?;
    serde_json::from_slice(&data)
        .with_context(|| format!("invalid preferences file {}", path.display()))
}

/// Explicit per-axis weights default to zero when only some are given.
pub fn resolve_preferences(
    gas: Option<f64>,
    speed: Option<f64>,
    security: Option<f64>,
    weights: Option<&str>,
    prefs_file: Option<&Path>,
) -> Result<UserPreferences> {
    let has_axis_flags = gas.is_some() || speed.is_some() || security.is_some();
    let sources = [has_axis_flags, weights.is_some(), prefs_file.is_some()]
        .into_iter()
        .filter(|given| *given)
        .count();
    if sources > 1 {
        return Err(anyhow!(
            "use only one of --gas/--speed/--security, --weights or --prefs"
        ));
    }

    if let Some(path) = prefs_file {
        return load_preferences(path);
    }
    if let Some(csv) = weights {
        return parse_weight_csv(csv);
    }
    if !has_axis_flags {
        return Err(anyhow!(
            "no weights given. use --gas/--speed/--security, --weights or --prefs"
        ));
    }
    Ok(UserPreferences::new(
        gas.unwrap_or(0.0),
        speed.unwrap_or(0.0),
        security.unwrap_or(0.0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weight_csv() {
        assert_eq!(
            parse_weight_csv("60, 30,10").unwrap(),
            UserPreferences::new(60.0, 30.0, 10.0)
        );
        assert_eq!(
            parse_weight_csv("-10,0,0.5").unwrap(),
            UserPreferences::new(-10.0, 0.0, 0.5)
        );
    }

    #[test]
    fn rejects_wrong_weight_count() {
        assert!(parse_weight_csv("60,40").is_err());
        assert!(parse_weight_csv("1,2,3,4").is_err());
        assert!(parse_weight_csv("1,,3").is_err());
        assert!(parse_weight_csv("1,two,3").is_err());
    }

    #[test]
    fn axis_flags_default_missing_axes_to_zero() {
        let prefs = resolve_preferences(None, Some(70.0), None, None, None).unwrap();
        assert_eq!(prefs, UserPreferences::new(0.0, 70.0, 0.0));
    }

    #[test]
    fn rejects_mixed_sources() {
        let err = resolve_preferences(Some(1.0), None, None, Some("1,2,3"), None).unwrap_err();
        assert!(err.to_string().contains("only one of"));
        assert!(resolve_preferences(None, None, None, None, None).is_err());
    }
}
