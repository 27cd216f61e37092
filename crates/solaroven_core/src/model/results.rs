use serde::{Deserialize, Serialize};

use crate::model::{CookingPhase, OvenType};

/// One temperature sample for one oven
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvenReading {
    pub oven_type: OvenType,
    pub time_minutes: f64,
    pub temperature_c: f64,
    /// Irradiance at the time of the reading in W/m²
    pub solar_radiation: f64,
    pub phase: CookingPhase,
}

/// Results from a single simulated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub seed: u64,
    pub time_points: Vec<f64>,
    /// Irradiance shared by every oven, one value per time point
    pub solar_radiation: Vec<f64>,
    /// Readings grouped by oven in `OvenType::ALL` order, time ascending
    pub readings: Vec<OvenReading>,
}

impl SessionResult {
    pub fn readings_for(&self, oven: OvenType) -> impl Iterator<Item = &OvenReading> {
        self.readings.iter().filter(move |r| r.oven_type == oven)
    }

    #[must_use]
    pub fn temperatures_for(&self, oven: OvenType) -> Vec<f64> {
        self.readings_for(oven).map(|r| r.temperature_c).collect()
    }

    /// (time, temperature) pairs for charting
    #[must_use]
    pub fn temperature_series(&self, oven: OvenType) -> Vec<(f64, f64)> {
        self.readings_for(oven)
            .map(|r| (r.time_minutes, r.temperature_c))
            .collect()
    }

    /// (irradiance, temperature) pairs for charting
    #[must_use]
    pub fn response_series(&self, oven: OvenType) -> Vec<(f64, f64)> {
        self.readings_for(oven)
            .map(|r| (r.solar_radiation, r.temperature_c))
            .collect()
    }

    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.time_points.last().copied().unwrap_or(0.0)
    }
}

/// Results from Monte Carlo simulation (multiple sessions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloResult {
    pub iterations: Vec<SessionResult>,
}
