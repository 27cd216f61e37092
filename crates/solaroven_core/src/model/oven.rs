use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Solar oven design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OvenType {
    /// Insulated box, slow warmup and steady heat retention
    Box,
    /// Reflector-focused, high peak temperature and fast response
    Parabolic,
    /// Hybrid reflector, moderate efficiency and good retention
    Funnel,
}

impl OvenType {
    /// All oven types in report order
    pub const ALL: [OvenType; 3] = [OvenType::Box, OvenType::Parabolic, OvenType::Funnel];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OvenType::Box => "Box",
            OvenType::Parabolic => "Parabolic",
            OvenType::Funnel => "Funnel",
        }
    }

    #[must_use]
    pub fn default_profile(self) -> OvenProfile {
        match self {
            OvenType::Box => OvenProfile::BOX,
            OvenType::Parabolic => OvenProfile::PARABOLIC,
            OvenType::Funnel => OvenProfile::FUNNEL,
        }
    }

    /// Short qualitative description used in reports
    #[must_use]
    pub fn insight(self) -> &'static str {
        match self {
            OvenType::Box => "Best for slow cooking, excellent heat retention",
            OvenType::Parabolic => "Highest temperatures, best for quick cooking",
            OvenType::Funnel => "Good balance, easiest to build with recycled materials",
        }
    }
}

impl fmt::Display for OvenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thermal characteristics of an oven design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvenProfile {
    /// Fraction of incoming irradiance converted to heat, in (0, 1]
    pub efficiency: f64,
    /// How much of the heating is deferred toward the end of the session, in [0, 1].
    /// Higher values mean slower warmup.
    pub thermal_mass: f64,
    /// Relative build cost (parabolic = 1.0)
    pub build_cost: f64,
}

impl OvenProfile {
    pub const BOX: OvenProfile = OvenProfile {
        efficiency: 0.65,
        thermal_mass: 0.8,
        build_cost: 0.6,
    };
    pub const PARABOLIC: OvenProfile = OvenProfile {
        efficiency: 0.85,
        thermal_mass: 0.4,
        build_cost: 1.0,
    };
    pub const FUNNEL: OvenProfile = OvenProfile {
        efficiency: 0.75,
        thermal_mass: 0.6,
        build_cost: 0.3,
    };

    /// Fraction of the full temperature rise available at sample `index` of `count`
    #[must_use]
    #[inline]
    pub fn warmup_factor(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return 1.0 - self.thermal_mass;
        }
        1.0 - self.thermal_mass + self.thermal_mass * index as f64 / count as f64
    }

    pub fn validate(&self, oven: OvenType) -> Result<(), ConfigError> {
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(ConfigError::InvalidOvenProfile {
                oven,
                field: "efficiency",
                value: self.efficiency,
                reason: "must be in (0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&self.thermal_mass) {
            return Err(ConfigError::InvalidOvenProfile {
                oven,
                field: "thermal_mass",
                value: self.thermal_mass,
                reason: "must be in [0, 1]",
            });
        }
        if !(self.build_cost > 0.0 && self.build_cost.is_finite()) {
            return Err(ConfigError::InvalidOvenProfile {
                oven,
                field: "build_cost",
                value: self.build_cost,
                reason: "must be positive and finite",
            });
        }
        Ok(())
    }
}

fn default_box() -> OvenProfile {
    OvenProfile::BOX
}

fn default_parabolic() -> OvenProfile {
    OvenProfile::PARABOLIC
}

fn default_funnel() -> OvenProfile {
    OvenProfile::FUNNEL
}

/// Profiles for every oven type, overridable field by field from config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvenProfiles {
    #[serde(rename = "box", default = "default_box")]
    pub box_oven: OvenProfile,
    #[serde(default = "default_parabolic")]
    pub parabolic: OvenProfile,
    #[serde(default = "default_funnel")]
    pub funnel: OvenProfile,
}

impl Default for OvenProfiles {
    fn default() -> Self {
        Self {
            box_oven: OvenProfile::BOX,
            parabolic: OvenProfile::PARABOLIC,
            funnel: OvenProfile::FUNNEL,
        }
    }
}

impl OvenProfiles {
    #[must_use]
    pub fn get(&self, oven: OvenType) -> &OvenProfile {
        match oven {
            OvenType::Box => &self.box_oven,
            OvenType::Parabolic => &self.parabolic,
            OvenType::Funnel => &self.funnel,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for oven in OvenType::ALL {
            self.get(oven).validate(oven)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles_are_valid() {
        assert!(OvenProfiles::default().validate().is_ok());
        for oven in OvenType::ALL {
            assert_eq!(*OvenProfiles::default().get(oven), oven.default_profile());
        }
    }

    #[test]
    fn test_warmup_factor_bounds() {
        let profile = OvenProfile::BOX;
        assert!((profile.warmup_factor(0, 24) - 0.2).abs() < 1e-12);
        assert!((profile.warmup_factor(24, 24) - 1.0).abs() < 1e-12);
        assert!(profile.warmup_factor(12, 24) < profile.warmup_factor(13, 24));
    }

    #[test]
    fn test_invalid_efficiency_rejected() {
        let profile = OvenProfile {
            efficiency: 1.5,
            ..OvenProfile::FUNNEL
        };
        let err = profile.validate(OvenType::Funnel).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOvenProfile {
                field: "efficiency",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_thermal_mass_rejected() {
        let profile = OvenProfile {
            thermal_mass: -0.1,
            ..OvenProfile::BOX
        };
        assert!(profile.validate(OvenType::Box).is_err());
    }
}
