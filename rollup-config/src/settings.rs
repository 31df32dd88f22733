use std::env;

use rollup_config_core::WeightPolicy;

use crate::output::OutputFormat;
use crate::sweep::WEIGHT_TOTAL;

pub const ENV_STRICT: &str = "ROLLUP_CONFIG_STRICT";
pub const ENV_FORMAT: &str = "ROLLUP_CONFIG_FORMAT";
pub const ENV_SWEEP_STEP: &str = "ROLLUP_CONFIG_SWEEP_STEP";

pub const DEFAULT_SWEEP_STEP: u32 = 10;

/// Defaults taken from the environment. Command-line flags take precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvSettings {
    pub strict: bool,
    pub format: OutputFormat,
    pub sweep_step: u32,
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self {
            strict: false,
            format: OutputFormat::Json,
            sweep_step: DEFAULT_SWEEP_STEP,
        }
    }
}

impl EnvSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`EnvSettings::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let format = match lookup(ENV_FORMAT) {
            Some(value) => value.parse::<OutputFormat>().unwrap_or_else(|err| {
                tracing::warn!("{ENV_FORMAT}: {err}. Falling back to {}.", defaults.format.as_str());
                defaults.format
            }),
            None => defaults.format,
        };

        let strict = lookup(ENV_STRICT)
            .map(|value| parse_bool(&value))
            .unwrap_or(defaults.strict);

        let mut sweep_step = lookup(ENV_SWEEP_STEP)
            .and_then(|value| parse_positive_u32(&value))
            .unwrap_or(defaults.sweep_step);
        if sweep_step > WEIGHT_TOTAL {
            tracing::warn!(
                "{ENV_SWEEP_STEP} ({}) > {}. Falling back to {}.",
                sweep_step,
                WEIGHT_TOTAL,
                defaults.sweep_step
            );
            sweep_step = defaults.sweep_step;
        }

        Self {
            strict,
            format,
            sweep_step,
        }
    }

    /// `--strict` / `--lenient` win over `ROLLUP_CONFIG_STRICT`.
    pub fn resolve_policy(&self, strict_flag: bool, lenient_flag: bool) -> WeightPolicy {
        if strict_flag {
            WeightPolicy::Strict
        } else if lenient_flag || !self.strict {
            WeightPolicy::Lenient
        } else {
            WeightPolicy::Strict
        }
    }

    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.format)
    }

    pub fn resolve_sweep_step(&self, flag: Option<u32>) -> u32 {
        flag.unwrap_or(self.sweep_step)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_positive_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|value| *value > 0)
}
