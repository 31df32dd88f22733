use anyhow::{anyhow, Result};
use rollup_config_core::{generate_config, ChainConfig, GenerationReport, UserPreferences};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    KeyValue,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::KeyValue => "kv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "kv" | "key-value" => Ok(Self::KeyValue),
            other => Err(anyhow!("unknown output format '{other}'. expected json or kv")),
        }
    }
}

pub fn render_config(config: &ChainConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::KeyValue => {
            let mut out = String::new();
            for (key, value) in config.entries() {
                writeln!(out, "{key}={value}")?;
            }
            Ok(out)
        }
    }
}

/// Human-oriented breakdown: ratios, fired rules, changed keys and fingerprint.
pub fn render_explanation(report: &GenerationReport) -> Result<String> {
    let mut out = String::new();
    let ratios = &report.ratios;
    writeln!(out, "divisor={}", ratios.divisor)?;
    writeln!(
        out,
        "ratios=gas_saving:{:.4},speed:{:.4},security:{:.4}",
        ratios.gas_saving, ratios.speed, ratios.security
    )?;
    let dominant = ratios
        .dominant()
        .map(|axis| axis.as_str())
        .unwrap_or("none");
    writeln!(out, "dominant={dominant}")?;
    if report.fired_rules.is_empty() {
        writeln!(out, "rules=none")?;
    } else {
        writeln!(out, "rules={}", report.fired_rules.join(","))?;
    }
    for change in &report.changes {
        writeln!(out, "  {} {} -> {}", change.key, change.from, change.to)?;
    }
    writeln!(out, "fingerprint={}", report.config.fingerprint_hex())?;
    Ok(out)
}

/// Sample output for weights gas=60 speed=30 security=10.
pub fn render_demo() -> Result<String> {
    let preferences = UserPreferences::new(60.0, 30.0, 10.0);
    let config = generate_config(&preferences);
    Ok(format!(
        "Generated Config:\n{}\n",
        render_config(&config, OutputFormat::Json)?
    ))
}

pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
