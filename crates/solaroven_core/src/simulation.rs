use rand::{Rng, RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::{ConfigError, Result, SimulationError};
use crate::model::{
    MonteCarloResult, OvenProfile, OvenReading, OvenType, SessionConfig, SessionResult,
};

/// Sample the irradiance for every time point of the session.
pub fn solar_radiation<R: Rng + ?Sized>(
    config: &SessionConfig,
    time_points: &[f64],
    rng: &mut R,
) -> std::result::Result<Vec<f64>, ConfigError> {
    let jitter = config
        .radiation
        .jitter
        .sample_sequence(rng, time_points.len())?;

    Ok(time_points
        .iter()
        .zip(jitter)
        .map(|(&t, j)| config.radiation.irradiance(t, j))
        .collect())
}

/// Generate one oven's temperature curve from a shared irradiance series.
///
/// Every value is clamped into `[ambient, max_plausible_temp_c]`.
pub fn oven_temperatures<R: Rng + ?Sized>(
    profile: &OvenProfile,
    config: &SessionConfig,
    radiation: &[f64],
    rng: &mut R,
) -> std::result::Result<Vec<f64>, ConfigError> {
    let count = radiation.len();
    let mut temperatures = Vec::with_capacity(count);

    for (i, &irradiance) in radiation.iter().enumerate() {
        let absorbed_kw = irradiance * profile.efficiency / 1000.0;
        let rise = absorbed_kw * profile.warmup_factor(i, count) * config.heat_gain_c;
        let noise = config.temperature_noise.sample(rng)?;
        let temp = config.ambient_temp_c + rise + noise;
        temperatures.push(temp.clamp(config.ambient_temp_c, config.max_plausible_temp_c));
    }

    Ok(temperatures)
}

/// Simulate one cooking session for every oven type.
///
/// The same seed always yields the same result.
pub fn simulate(config: &SessionConfig, seed: u64) -> Result<SessionResult> {
    config.validate()?;
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);

    let time_points = config.time_points();
    let radiation = solar_radiation(config, &time_points, &mut rng)?;

    let mut readings = Vec::with_capacity(time_points.len() * OvenType::ALL.len());
    for oven in OvenType::ALL {
        let temperatures = oven_temperatures(config.ovens.get(oven), config, &radiation, &mut rng)?;
        readings.extend(
            time_points
                .iter()
                .zip(&radiation)
                .zip(temperatures)
                .map(|((&time, &irradiance), temperature)| OvenReading {
                    oven_type: oven,
                    time_minutes: time,
                    temperature_c: temperature,
                    solar_radiation: irradiance,
                    phase: config.phase_at(time),
                }),
        );
    }

    Ok(SessionResult {
        seed,
        time_points,
        solar_radiation: radiation,
        readings,
    })
}

/// Run `num_iterations` sessions with seeds derived from `seed`.
///
/// Iterations are batched; each batch owns its seed generator, so the
/// result order does not depend on thread scheduling.
pub fn monte_carlo_simulate(
    config: &SessionConfig,
    num_iterations: usize,
    seed: u64,
) -> Result<MonteCarloResult> {
    const MAX_BATCH_SIZE: usize = 100;

    if num_iterations == 0 {
        return Err(SimulationError::NoIterations);
    }
    config.validate()?;

    let num_batches = num_iterations.div_ceil(MAX_BATCH_SIZE);

    let run_batch = |i: usize| -> Result<Vec<SessionResult>> {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(seed.wrapping_add(i as u64));

        let batch_size = if i == num_batches - 1 {
            num_iterations - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };

        (0..batch_size)
            .map(|_| simulate(config, rng.next_u64()))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let batches: Vec<Vec<SessionResult>> = (0..num_batches)
        .into_par_iter()
        .map(run_batch)
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let batches: Vec<Vec<SessionResult>> =
        (0..num_batches).map(run_batch).collect::<Result<_>>()?;

    Ok(MonteCarloResult {
        iterations: batches.into_iter().flatten().collect(),
    })
}
