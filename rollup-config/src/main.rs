use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rollup_config::output::{
    render_config, render_demo, render_explanation, write_output, OutputFormat,
};
use rollup_config::runner::{run_generate, select_rules};
use rollup_config::settings::EnvSettings;
use rollup_config::sweep::{run_sweep, SweepConfig};
use rollup_config::util::resolve_preferences;
use rollup_config_core::base_config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollup-config")]
#[command(about = "Generate rollup chain parameters from gas/speed/security preference weights")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a chain config from preference weights
    Generate {
        /// Gas-saving weight (nominally 0-100)
        #[arg(long, allow_negative_numbers = true)]
        gas: Option<f64>,
        /// Speed weight (nominally 0-100)
        #[arg(long, allow_negative_numbers = true)]
        speed: Option<f64>,
        /// Security weight (nominally 0-100)
        #[arg(long, allow_negative_numbers = true)]
        security: Option<f64>,
        /// All three weights as gas,speed,security
        #[arg(long, allow_hyphen_values = true)]
        weights: Option<String>,
        /// JSON file with gasSavingWeight/speedWeight/securityWeight
        #[arg(long)]
        prefs: Option<PathBuf>,
        /// Reject negative and non-finite weights
        #[arg(long, default_value_t = false, conflicts_with = "lenient")]
        strict: bool,
        /// Accept any numeric weight, even when ROLLUP_CONFIG_STRICT is set
        #[arg(long, default_value_t = false)]
        lenient: bool,
        #[arg(long, value_enum)]
        format: Option<CliFormat>,
        /// Print ratios, fired rules and changed keys to stderr
        #[arg(long, default_value_t = false)]
        explain: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the base parameter set
    Base {
        #[arg(long, value_enum)]
        format: Option<CliFormat>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List adjustment rules in application order
    Rules {
        /// Show a single rule
        #[arg(long)]
        id: Option<String>,
        /// Only rules that override this parameter (e.g. sequencerWindowSize)
        #[arg(long)]
        key: Option<String>,
    },
    /// Generate the sample config for weights gas=60 speed=30 security=10
    Demo,
    /// Evaluate every weight triple on a grid and summarize the resulting configs
    Sweep {
        /// Grid step in weight units (the three weights always sum to 100)
        #[arg(long)]
        step: Option<u32>,
        #[arg(long)]
        jobs: Option<usize>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliFormat {
    Json,
    Kv,
}

impl From<CliFormat> for OutputFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Kv => OutputFormat::KeyValue,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = EnvSettings::from_env();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Generate {
            gas,
            speed,
            security,
            weights,
            prefs,
            strict,
            lenient,
            format,
            explain,
            output,
        } => {
            let preferences =
                resolve_preferences(gas, speed, security, weights.as_deref(), prefs.as_deref())?;
            let policy = settings.resolve_policy(strict, lenient);
            let format = settings.resolve_format(format.map(OutputFormat::from));

            let report = run_generate(&preferences, policy)?;
            if explain {
                eprint!("{}", render_explanation(&report)?);
            }
            emit(&render_config(&report.config, format)?, output)?;
        }
        Commands::Base { format, output } => {
            let format = settings.resolve_format(format.map(OutputFormat::from));
            emit(&render_config(&base_config(), format)?, output)?;
        }
        Commands::Rules { id, key } => {
            for rule in select_rules(id.as_deref(), key.as_deref())? {
                println!("{:12} axis={:10} {}", rule.id, rule.axis.as_str(), rule.description);
                for (key, value) in rule.overrides {
                    println!("  {key}={value} ({})", key.unit());
                }
            }
        }
        Commands::Demo => {
            print!("{}", render_demo()?);
        }
        Commands::Sweep { step, jobs, output } => {
            let step = settings.resolve_sweep_step(step);
            let report = run_sweep(SweepConfig { step, jobs })?;

            println!("step={}", report.step);
            println!("points={}", report.points);
            println!("outcomes={}", report.outcomes.len());
            for outcome in &report.outcomes {
                let rules = if outcome.fired_rules.is_empty() {
                    "none".to_string()
                } else {
                    outcome.fired_rules.join("+")
                };
                println!(
                    "  {} rules={} count={} share={:.1}% example={}/{}/{}",
                    outcome.fingerprint,
                    rules,
                    outcome.count,
                    outcome.share * 100.0,
                    outcome.example.gas_saving_weight,
                    outcome.example.speed_weight,
                    outcome.example.security_weight,
                );
            }

            if let Some(path) = output {
                let encoded = serde_json::to_string_pretty(&report)?;
                write_output(&path, &encoded)
                    .with_context(|| format!("failed writing sweep report {}", path.display()))?;
                println!("output={}", path.display());
            }
        }
    }

    Ok(())
}

fn emit(rendered: &str, output: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output {
        write_output(&path, rendered)
            .with_context(|| format!("failed writing config {}", path.display()))?;
        println!("wrote={}", path.display());
    } else {
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
