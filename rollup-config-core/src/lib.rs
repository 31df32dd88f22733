#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod base;
pub mod constants;
pub mod error;
pub mod generate;
pub mod params;
pub mod preferences;
pub mod rules;

pub use base::base_config;
pub use error::{ParamKeyError, PreferenceError};
pub use generate::{
    generate_config, generate_config_checked, generate_report, GenerationReport, WeightPolicy,
};
pub use params::{ChainConfig, ParamChange, ParamKey};
pub use preferences::{Axis, PreferenceRatios, UserPreferences};
pub use rules::{AdjustmentRule, RULES};
