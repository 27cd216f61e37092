//! Per-oven efficiency summaries computed from one simulated session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::stats;
use crate::model::{CookingPhase, OvenReading, OvenType, SessionConfig, SessionResult};

/// Aggregate statistics for one oven over one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencySummary {
    pub oven_type: OvenType,
    pub sample_count: usize,
    pub mean_temp_c: f64,
    pub peak_temp_c: f64,
    pub min_temp_c: f64,
    /// Sample standard deviation; zero when only one reading exists
    pub std_dev_c: f64,
    /// Mean temperature above ambient
    pub mean_rise_c: f64,
    /// Mean irradiance over the session in W/m²
    pub mean_solar_input: f64,
    /// `mean_temp_c / mean_solar_input * 100`
    pub efficiency_ratio: f64,
    /// Mean rise relative to the baseline oven's mean rise
    pub baseline_ratio: Option<f64>,
    /// First sample time at or above the cooking threshold
    pub time_to_cooking_minutes: Option<f64>,
    pub phase_means: BTreeMap<CookingPhase, f64>,
    /// Maintenance-phase mean rise divided by cooking-phase mean rise
    pub retention_ratio: Option<f64>,
    /// Pearson correlation between irradiance and temperature
    pub radiation_correlation: Option<f64>,
}

/// First reading time at or above `threshold_c`.
///
/// Readings must be in ascending time order.
pub fn time_to_temperature<'a>(
    readings: impl IntoIterator<Item = &'a OvenReading>,
    threshold_c: f64,
) -> Option<f64> {
    readings
        .into_iter()
        .find(|r| r.temperature_c >= threshold_c)
        .map(|r| r.time_minutes)
}

impl EfficiencySummary {
    /// Summarize one oven's readings. Returns `None` when there are none.
    ///
    /// `baseline_ratio` is left unset; `summarize` fills it in once every
    /// oven has been summarized.
    #[must_use]
    pub fn from_readings(
        oven: OvenType,
        readings: &[OvenReading],
        config: &SessionConfig,
    ) -> Option<Self> {
        let temps: Vec<f64> = readings.iter().map(|r| r.temperature_c).collect();
        let radiation: Vec<f64> = readings.iter().map(|r| r.solar_radiation).collect();

        let mean_temp_c = stats::mean(&temps)?;
        let mean_solar_input = stats::mean(&radiation)?;

        let mut phase_means = BTreeMap::new();
        for phase in CookingPhase::ALL {
            let phase_temps: Vec<f64> = readings
                .iter()
                .filter(|r| r.phase == phase)
                .map(|r| r.temperature_c)
                .collect();
            if let Some(m) = stats::mean(&phase_temps) {
                phase_means.insert(phase, m);
            }
        }

        let ambient = config.ambient_temp_c;
        let retention_ratio = match (
            phase_means.get(&CookingPhase::Cooking),
            phase_means.get(&CookingPhase::Maintenance),
        ) {
            (Some(cooking), Some(maintenance)) if *cooking > ambient => {
                Some((maintenance - ambient) / (cooking - ambient))
            }
            _ => None,
        };

        let efficiency_ratio = if mean_solar_input > 0.0 {
            mean_temp_c / mean_solar_input * 100.0
        } else {
            0.0
        };

        Some(Self {
            oven_type: oven,
            sample_count: temps.len(),
            mean_temp_c,
            peak_temp_c: stats::max(&temps)?,
            min_temp_c: stats::min(&temps)?,
            std_dev_c: stats::std_dev(&temps).unwrap_or(0.0),
            mean_rise_c: mean_temp_c - ambient,
            mean_solar_input,
            efficiency_ratio,
            baseline_ratio: None,
            time_to_cooking_minutes: time_to_temperature(readings, config.cooking_threshold_c),
            phase_means,
            retention_ratio,
            radiation_correlation: stats::pearson_correlation(&radiation, &temps),
        })
    }

    #[must_use]
    pub fn reached_cooking_temperature(&self) -> bool {
        self.time_to_cooking_minutes.is_some()
    }
}

/// Summarize every oven in `OvenType::ALL` order.
#[must_use]
pub fn summarize(result: &SessionResult, config: &SessionConfig) -> Vec<EfficiencySummary> {
    let mut summaries: Vec<EfficiencySummary> = OvenType::ALL
        .iter()
        .filter_map(|&oven| {
            let readings: Vec<OvenReading> = result.readings_for(oven).copied().collect();
            EfficiencySummary::from_readings(oven, &readings, config)
        })
        .collect();

    let baseline_rise = summaries
        .iter()
        .find(|s| s.oven_type == config.baseline)
        .map(|s| s.mean_rise_c)
        .filter(|rise| *rise > 0.0);

    if let Some(baseline_rise) = baseline_rise {
        for summary in &mut summaries {
            summary.baseline_ratio = Some(summary.mean_rise_c / baseline_rise);
        }
    }

    summaries
}
