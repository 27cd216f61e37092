use std::f64::consts::PI;

use rand::{Rng, distr::Distribution};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Random perturbation model
///
/// Struct variants keep the internally tagged representation valid for
/// every profile, including fixed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NoiseProfile {
    /// Always samples zero
    None,
    Fixed {
        value: f64,
    },
    Normal {
        mean: f64,
        std_dev: f64,
    },
}

impl NoiseProfile {
    /// Multiplicative irradiance jitter used by the reference analysis
    pub const RADIATION_JITTER: NoiseProfile = NoiseProfile::Normal {
        mean: 1.0,
        std_dev: 0.1,
    };
    /// Additive thermometer noise in °C
    pub const THERMOMETER: NoiseProfile = NoiseProfile::Normal {
        mean: 0.0,
        std_dev: 3.0,
    };

    /// Check distribution parameters without sampling
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            NoiseProfile::None => Ok(()),
            NoiseProfile::Fixed { value } if value.is_finite() => Ok(()),
            NoiseProfile::Fixed { value } => Err(ConfigError::InvalidNoiseProfile {
                profile_type: "Fixed noise",
                mean: *value,
                std_dev: 0.0,
                reason: "value must be finite",
            }),
            NoiseProfile::Normal { mean, std_dev } => normal(*mean, *std_dev).map(|_| ()),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ConfigError> {
        match self {
            NoiseProfile::None => Ok(0.0),
            NoiseProfile::Fixed { value } => Ok(*value),
            NoiseProfile::Normal { mean, std_dev } => {
                normal(*mean, *std_dev).map(|d| d.sample(rng))
            }
        }
    }

    /// Sample `n` independent values.
    pub fn sample_sequence<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<Vec<f64>, ConfigError> {
        let mut results = Vec::with_capacity(n);
        for _ in 0..n {
            results.push(self.sample(rng)?);
        }
        Ok(results)
    }
}

/// Normal distribution with finite parameters and a non-negative spread
fn normal(mean: f64, std_dev: f64) -> Result<rand_distr::Normal<f64>, ConfigError> {
    let invalid = |reason| ConfigError::InvalidNoiseProfile {
        profile_type: "Normal noise",
        mean,
        std_dev,
        reason,
    };
    if !mean.is_finite() {
        return Err(invalid("mean must be finite"));
    }
    if !(std_dev.is_finite() && std_dev >= 0.0) {
        return Err(invalid("std_dev must be non-negative and finite"));
    }
    rand_distr::Normal::new(mean, std_dev)
        .map_err(|_| invalid("std_dev must be non-negative and finite"))
}

/// Solar irradiance over a session:
/// `base + amplitude * sin(pi * t / period) * jitter`, in W/m²
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiationProfile {
    pub base_w_m2: f64,
    pub amplitude_w_m2: f64,
    pub period_minutes: f64,
    /// Multiplier applied to the sinusoidal term
    pub jitter: NoiseProfile,
}

impl Default for RadiationProfile {
    fn default() -> Self {
        Self {
            base_w_m2: 800.0,
            amplitude_w_m2: 200.0,
            period_minutes: 60.0,
            jitter: NoiseProfile::RADIATION_JITTER,
        }
    }
}

impl RadiationProfile {
    /// Irradiance at `minutes` for a given jitter multiplier, floored at zero
    #[must_use]
    #[inline]
    pub fn irradiance(&self, minutes: f64, jitter: f64) -> f64 {
        let wave = (PI * minutes / self.period_minutes).sin();
        (self.base_w_m2 + self.amplitude_w_m2 * wave * jitter).max(0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.period_minutes > 0.0 && self.period_minutes.is_finite()) {
            return Err(ConfigError::InvalidNoiseProfile {
                profile_type: "Radiation wave",
                mean: self.base_w_m2,
                std_dev: self.period_minutes,
                reason: "period must be positive and finite",
            });
        }
        if !(self.base_w_m2.is_finite() && self.amplitude_w_m2.is_finite()) {
            return Err(ConfigError::InvalidNoiseProfile {
                profile_type: "Radiation wave",
                mean: self.base_w_m2,
                std_dev: self.amplitude_w_m2,
                reason: "base and amplitude must be finite",
            });
        }
        self.jitter.validate()
    }
}
