use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::constants::{RATIO_THRESHOLD, WEIGHT_MAX, WEIGHT_MIN};
use crate::error::PreferenceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    GasSaving,
    Speed,
    Security,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Self::GasSaving, Self::Speed, Self::Security];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GasSaving => "gas_saving",
            Self::Speed => "speed",
            Self::Security => "security",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied preference strengths, nominally each in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub gas_saving_weight: f64,
    pub speed_weight: f64,
    pub security_weight: f64,
}

impl UserPreferences {
    pub fn new(gas_saving_weight: f64, speed_weight: f64, security_weight: f64) -> Self {
        Self {
            gas_saving_weight,
            speed_weight,
            security_weight,
        }
    }

    pub fn weight(&self, axis: Axis) -> f64 {
        match axis {
            Axis::GasSaving => self.gas_saving_weight,
            Axis::Speed => self.speed_weight,
            Axis::Security => self.security_weight,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.gas_saving_weight + self.speed_weight + self.security_weight
    }

    /// Total weight, with a zero (or NaN) total replaced by `1.0` so every ratio is zero.
    pub fn divisor(&self) -> f64 {
        let total = self.total_weight();
        if total == 0.0 || total.is_nan() {
            1.0
        } else {
            total
        }
    }

    pub fn ratios(&self) -> PreferenceRatios {
        let divisor = self.divisor();
        PreferenceRatios {
            gas_saving: self.gas_saving_weight / divisor,
            speed: self.speed_weight / divisor,
            security: self.security_weight / divisor,
            divisor,
        }
    }

    /// Rejects negative and non-finite weights. Values above the nominal range pass.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        for axis in Axis::ALL {
            let value = self.weight(axis);
            if !value.is_finite() {
                return Err(PreferenceError::NonFiniteWeight { axis });
            }
            if value < 0.0 {
                return Err(PreferenceError::NegativeWeight { axis, value });
            }
        }
        Ok(())
    }

    /// Axes with a finite weight outside `WEIGHT_MIN..=WEIGHT_MAX`.
    pub fn out_of_range_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|axis| {
                let value = self.weight(*axis);
                value.is_finite() && !(WEIGHT_MIN..=WEIGHT_MAX).contains(&value)
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRatios {
    pub gas_saving: f64,
    pub speed: f64,
    pub security: f64,
    pub divisor: f64,
}

impl PreferenceRatios {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::GasSaving => self.gas_saving,
            Axis::Speed => self.speed,
            Axis::Security => self.security,
        }
    }

    pub fn exceeds_threshold(&self, axis: Axis) -> bool {
        self.get(axis) > RATIO_THRESHOLD
    }

    pub fn exceeding(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|axis| self.exceeds_threshold(*axis))
            .collect()
    }

    /// The only axis above the threshold. `None` when no axis, or more than one, is.
    pub fn dominant(&self) -> Option<Axis> {
        match self.exceeding().as_slice() {
            [axis] => Some(*axis),
            _ => None,
        }
    }
}
