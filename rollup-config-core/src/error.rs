use alloc::string::String;
use core::fmt;

use crate::preferences::Axis;

/// Rejections raised by the strict weight policy.
#[derive(Clone, Debug, PartialEq)]
pub enum PreferenceError {
    NegativeWeight { axis: Axis, value: f64 },
    NonFiniteWeight { axis: Axis },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWeight { axis, value } => {
                write!(f, "{} weight must not be negative: got {value}", axis.as_str())
            }
            Self::NonFiniteWeight { axis } => {
                write!(f, "{} weight must be a finite number", axis.as_str())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PreferenceError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamKeyError {
    Unknown { name: String },
}

impl fmt::Display for ParamKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "unknown chain config parameter: {name}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParamKeyError {}
