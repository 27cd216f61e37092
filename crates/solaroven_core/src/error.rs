use std::fmt;

use crate::model::{MAX_SAMPLES, OvenType};

/// Errors raised while validating a session configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Session length must be positive and finite
    InvalidSessionLength(f64),
    /// Sample interval must be positive and no longer than the session
    InvalidSampleInterval { interval: f64, session: f64 },
    InvalidPhaseBoundaries { warmup_end: f64, cooking_end: f64 },
    InvalidOvenProfile {
        oven: OvenType,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Temperature ceiling must sit above ambient
    InvalidTemperatureRange { ambient: f64, ceiling: f64 },
    InvalidNoiseProfile {
        profile_type: &'static str,
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    InvalidHeatGain(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSessionLength(minutes) => {
                write!(f, "session length must be positive, got {minutes} minutes")
            }
            ConfigError::InvalidSampleInterval { interval, session } => write!(
                f,
                "sample interval {interval} must be positive and cover the {session} minute session in at most {MAX_SAMPLES} samples"
            ),
            ConfigError::InvalidPhaseBoundaries {
                warmup_end,
                cooking_end,
            } => write!(
                f,
                "phase boundaries must satisfy 0 < warmup_end <= cooking_end (warmup_end={warmup_end}, cooking_end={cooking_end})"
            ),
            ConfigError::InvalidOvenProfile {
                oven,
                field,
                value,
                reason,
            } => write!(f, "invalid {field}={value} for {oven} oven: {reason}"),
            ConfigError::InvalidTemperatureRange { ambient, ceiling } => write!(
                f,
                "max plausible temperature {ceiling} must exceed ambient temperature {ambient}"
            ),
            ConfigError::InvalidNoiseProfile {
                profile_type,
                mean,
                std_dev,
                reason,
            } => write!(
                f,
                "invalid {profile_type} parameters (mean={mean}, std_dev={std_dev}): {reason}"
            ),
            ConfigError::InvalidHeatGain(gain) => {
                write!(f, "heat gain must be positive and finite, got {gain}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while running a simulation
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Config(ConfigError),
    /// A Monte Carlo run was requested with zero iterations
    NoIterations,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Config(e) => write!(f, "configuration error: {e}"),
            SimulationError::NoIterations => write!(f, "monte carlo needs at least one iteration"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            SimulationError::NoIterations => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        SimulationError::Config(err)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
