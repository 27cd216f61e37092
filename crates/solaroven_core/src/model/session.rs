use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{NoiseProfile, OvenProfiles, OvenType, RadiationProfile};

/// Tolerance when deciding whether a sample falls on the session end
const TIME_EPSILON: f64 = 1e-9;

/// Upper bound on samples per oven in one session
pub const MAX_SAMPLES: usize = 100_000;

/// Stage of a cooking session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CookingPhase {
    Warmup,
    Cooking,
    Maintenance,
}

impl CookingPhase {
    pub const ALL: [CookingPhase; 3] = [
        CookingPhase::Warmup,
        CookingPhase::Cooking,
        CookingPhase::Maintenance,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CookingPhase::Warmup => "Warmup",
            CookingPhase::Cooking => "Cooking",
            CookingPhase::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for CookingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything needed to simulate one cooking session
///
/// Temperatures are in °C, times in minutes, irradiance in W/m².
/// Every field has a default so partial config files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub duration_minutes: f64,
    pub sample_interval_minutes: f64,
    pub ambient_temp_c: f64,
    /// Temperature needed for effective cooking
    pub cooking_threshold_c: f64,
    /// Upper clamp for generated temperatures
    pub max_plausible_temp_c: f64,
    /// Temperature rise per kW/m² of absorbed irradiance
    pub heat_gain_c: f64,
    pub warmup_end_minutes: f64,
    pub cooking_end_minutes: f64,
    pub radiation: RadiationProfile,
    pub temperature_noise: NoiseProfile,
    pub ovens: OvenProfiles,
    /// Oven the others are compared against in efficiency summaries
    pub baseline: OvenType,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: 120.0,
            sample_interval_minutes: 5.0,
            ambient_temp_c: 25.0,
            cooking_threshold_c: 80.0,
            max_plausible_temp_c: 350.0,
            heat_gain_c: 150.0,
            warmup_end_minutes: 30.0,
            cooking_end_minutes: 90.0,
            radiation: RadiationProfile::default(),
            temperature_noise: NoiseProfile::THERMOMETER,
            ovens: OvenProfiles::default(),
            baseline: OvenType::Box,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_minutes > 0.0 && self.duration_minutes.is_finite()) {
            return Err(ConfigError::InvalidSessionLength(self.duration_minutes));
        }
        if !(self.sample_interval_minutes > 0.0
            && self.sample_interval_minutes <= self.duration_minutes
            && self.duration_minutes / self.sample_interval_minutes <= MAX_SAMPLES as f64)
        {
            return Err(ConfigError::InvalidSampleInterval {
                interval: self.sample_interval_minutes,
                session: self.duration_minutes,
            });
        }
        if !(self.warmup_end_minutes > 0.0 && self.warmup_end_minutes <= self.cooking_end_minutes)
        {
            return Err(ConfigError::InvalidPhaseBoundaries {
                warmup_end: self.warmup_end_minutes,
                cooking_end: self.cooking_end_minutes,
            });
        }
        if !(self.ambient_temp_c.is_finite()
            && self.max_plausible_temp_c.is_finite()
            && self.max_plausible_temp_c > self.ambient_temp_c)
        {
            return Err(ConfigError::InvalidTemperatureRange {
                ambient: self.ambient_temp_c,
                ceiling: self.max_plausible_temp_c,
            });
        }
        if !(self.heat_gain_c > 0.0 && self.heat_gain_c.is_finite()) {
            return Err(ConfigError::InvalidHeatGain(self.heat_gain_c));
        }
        self.radiation.validate()?;
        self.temperature_noise.validate()?;
        self.ovens.validate()
    }

    /// Number of samples in the session (the end point is excluded)
    #[must_use]
    pub fn sample_count(&self) -> usize {
        if self.sample_interval_minutes <= 0.0 || self.duration_minutes <= 0.0 {
            return 0;
        }
        let count = (self.duration_minutes / self.sample_interval_minutes - TIME_EPSILON).ceil();
        (count as usize).min(MAX_SAMPLES)
    }

    /// Sample times `0, dt, 2dt, ...` strictly before the session end
    #[must_use]
    pub fn time_points(&self) -> Vec<f64> {
        (0..self.sample_count())
            .map(|i| i as f64 * self.sample_interval_minutes)
            .collect()
    }

    #[must_use]
    pub fn phase_at(&self, minutes: f64) -> CookingPhase {
        if minutes < self.warmup_end_minutes {
            CookingPhase::Warmup
        } else if minutes < self.cooking_end_minutes {
            CookingPhase::Cooking
        } else {
            CookingPhase::Maintenance
        }
    }

    /// Copy of this config with a different session length
    #[must_use]
    pub fn with_duration(&self, minutes: f64) -> Self {
        Self {
            duration_minutes: minutes,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_time_points() {
        let config = SessionConfig::default();
        let points = config.time_points();
        assert_eq!(points.len(), 24);
        assert_eq!(points.first(), Some(&0.0));
        assert_eq!(points.last(), Some(&115.0));
    }

    #[test]
    fn test_uneven_interval_excludes_end() {
        let config = SessionConfig {
            duration_minutes: 10.0,
            sample_interval_minutes: 3.0,
            ..Default::default()
        };
        assert_eq!(config.time_points(), vec![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_fractional_interval_rounding() {
        let config = SessionConfig {
            duration_minutes: 1.0,
            sample_interval_minutes: 0.1,
            ..Default::default()
        };
        assert_eq!(config.sample_count(), 10);
    }

    #[test]
    fn test_phase_boundaries() {
        let config = SessionConfig::default();
        assert_eq!(config.phase_at(0.0), CookingPhase::Warmup);
        assert_eq!(config.phase_at(25.0), CookingPhase::Warmup);
        assert_eq!(config.phase_at(30.0), CookingPhase::Cooking);
        assert_eq!(config.phase_at(85.0), CookingPhase::Cooking);
        assert_eq!(config.phase_at(90.0), CookingPhase::Maintenance);
    }

    #[test]
    fn test_non_positive_session_length_rejected() {
        for minutes in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let config = SessionConfig::default().with_duration(minutes);
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidSessionLength(_))
                ),
                "duration {minutes} should be rejected"
            );
        }
    }

    #[test]
    fn test_interval_longer_than_session_rejected() {
        let config = SessionConfig {
            duration_minutes: 10.0,
            sample_interval_minutes: 15.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSampleInterval { .. })
        ));
    }

    #[test]
    fn test_tiny_interval_rejected() {
        let config = SessionConfig {
            sample_interval_minutes: 1e-300,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSampleInterval { .. })
        ));
        assert_eq!(config.sample_count(), MAX_SAMPLES);
    }

    #[test]
    fn test_fine_interval_accepted() {
        let config = SessionConfig {
            sample_interval_minutes: 0.01,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_count(), 12_000);
    }

    #[test]
    fn test_non_finite_noise_means_rejected() {
        for mean in [f64::NAN, f64::INFINITY] {
            let noisy = SessionConfig {
                temperature_noise: NoiseProfile::Normal { mean, std_dev: 3.0 },
                ..Default::default()
            };
            assert!(matches!(
                noisy.validate(),
                Err(ConfigError::InvalidNoiseProfile { .. })
            ));

            let mut jittered = SessionConfig::default();
            jittered.radiation.jitter = NoiseProfile::Normal { mean, std_dev: 0.1 };
            assert!(matches!(
                jittered.validate(),
                Err(ConfigError::InvalidNoiseProfile { .. })
            ));
        }
    }

    #[test]
    fn test_inverted_phases_rejected() {
        let config = SessionConfig {
            warmup_end_minutes: 60.0,
            cooking_end_minutes: 30.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPhaseBoundaries { .. })
        ));
    }

    #[test]
    fn test_ceiling_below_ambient_rejected() {
        let config = SessionConfig {
            max_plausible_temp_c: 20.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemperatureRange { .. })
        ));
    }
}
