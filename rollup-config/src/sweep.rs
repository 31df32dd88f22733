use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use rollup_config_core::{generate_report, ChainConfig, UserPreferences};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const WEIGHT_TOTAL: u32 = 100;

#[derive(Clone, Copy, Debug)]
pub struct SweepConfig {
    pub step: u32,
    pub jobs: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub fired_rules: Vec<String>,
    pub fingerprint: String,
    pub count: usize,
    pub share: f64,
    /// First grid point (in enumeration order) that produced this config.
    pub example: UserPreferences,
    pub config: ChainConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SweepReport {
    pub step: u32,
    pub points: usize,
    pub outcomes: Vec<SweepOutcome>,
}

struct PointResult {
    prefs: UserPreferences,
    fired_rules: Vec<&'static str>,
    config: ChainConfig,
}

/// Every `(gas, speed, security)` triple on the `step` grid summing to [`WEIGHT_TOTAL`].
pub fn weight_grid(step: u32) -> Result<Vec<UserPreferences>> {
    if step == 0 || step > WEIGHT_TOTAL {
        return Err(anyhow!("sweep step must be in 1..={WEIGHT_TOTAL}, got {step}"));
    }
    let mut out = Vec::new();
    for gas in (0..=WEIGHT_TOTAL).step_by(step as usize) {
        for speed in (0..=WEIGHT_TOTAL - gas).step_by(step as usize) {
            let security = WEIGHT_TOTAL - gas - speed;
            out.push(UserPreferences::new(gas as f64, speed as f64, security as f64));
        }
    }
    Ok(out)
}

pub fn run_sweep(config: SweepConfig) -> Result<SweepReport> {
    let grid = weight_grid(config.step)?;
    tracing::info!(step = config.step, points = grid.len(), "starting sweep");

    let evaluate = |prefs: &UserPreferences| {
        let report = generate_report(prefs);
        PointResult {
            prefs: *prefs,
            fired_rules: report.fired_rules,
            config: report.config,
        }
    };

    let results: Vec<PointResult> = if let Some(jobs) = config.jobs {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build rayon threadpool")?;
        pool.install(|| grid.par_iter().map(evaluate).collect())
    } else {
        grid.par_iter().map(evaluate).collect()
    };

    // Keyed by fingerprint; results arrive in grid order so `example` is stable.
    let mut grouped: BTreeMap<String, SweepOutcome> = BTreeMap::new();
    for result in &results {
        let fingerprint = result.config.fingerprint_hex();
        grouped
            .entry(fingerprint.clone())
            .and_modify(|outcome| outcome.count += 1)
            .or_insert_with(|| SweepOutcome {
                fired_rules: result.fired_rules.iter().map(|id| id.to_string()).collect(),
                fingerprint,
                count: 1,
                share: 0.0,
                example: result.prefs,
                config: result.config,
            });
    }

    let points = results.len();
    let mut outcomes: Vec<SweepOutcome> = grouped.into_values().collect();
    for outcome in &mut outcomes {
        outcome.share = outcome.count as f64 / points as f64;
    }
    outcomes.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.fingerprint.cmp(&b.fingerprint))
    });

    tracing::info!(outcomes = outcomes.len(), "sweep complete");
    Ok(SweepReport {
        step: config.step,
        points,
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_points_sum_to_total() {
        let grid = weight_grid(10).unwrap();
        assert_eq!(grid.len(), 66);
        assert!(grid
            .iter()
            .all(|prefs| prefs.total_weight() == WEIGHT_TOTAL as f64));
    }

    #[test]
    fn uneven_step_still_sums_to_total() {
        let grid = weight_grid(30).unwrap();
        assert!(grid.contains(&UserPreferences::new(90.0, 0.0, 10.0)));
        assert!(grid
            .iter()
            .all(|prefs| prefs.total_weight() == WEIGHT_TOTAL as f64));
    }

    #[test]
    fn rejects_bad_step() {
        assert!(weight_grid(0).is_err());
        assert!(weight_grid(101).is_err());
    }
}
