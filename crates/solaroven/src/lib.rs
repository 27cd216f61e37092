//! Solar oven efficiency analysis
//!
//! Runs the simulation from `solaroven_core`, then turns the results into a
//! plain-text report, static text charts, and optional exported files.

pub mod charts;
pub mod config;
pub mod export;
pub mod format;
pub mod logging;
pub mod report;

#[cfg(test)]
mod tests;

use solaroven_core::analysis::{EnsembleReport, summarize_ensemble};
use solaroven_core::error::SimulationError;
use solaroven_core::{
    EfficiencySummary, Recommendation, SessionConfig, SessionResult, monte_carlo_simulate,
    recommend, simulate, summarize,
};

pub use config::AnalysisFile;
pub use logging::init_logging;

/// Everything computed for one run of the tool
#[derive(Debug, Clone)]
pub struct Analysis {
    pub config: SessionConfig,
    pub seed: u64,
    /// The session shown in tables and charts (always simulated with `seed`)
    pub session: SessionResult,
    pub summaries: Vec<EfficiencySummary>,
    pub recommendations: Vec<Recommendation>,
    /// Present when more than one iteration was requested
    pub ensemble: Option<EnsembleReport>,
}

/// Simulate, summarize, and recommend.
pub fn run_analysis(file: &AnalysisFile) -> Result<Analysis, SimulationError> {
    let config = file.session.clone();

    let session = simulate(&config, file.seed)?;
    let summaries = summarize(&session, &config);
    let recommendations = recommend(&summaries, &config.ovens);
    tracing::info!(
        seed = file.seed,
        readings = session.readings.len(),
        "simulated session"
    );

    // Zero iterations reaches the ensemble run and fails there
    let ensemble = match file.iterations {
        1 => None,
        iterations => {
            let mc = monte_carlo_simulate(&config, iterations, file.seed)?;
            tracing::info!(iterations = mc.iterations.len(), "monte carlo complete");
            Some(summarize_ensemble(&mc, &config))
        }
    };

    for rec in &recommendations {
        tracing::debug!(need = %rec.need, oven = %rec.oven, score = rec.score, "recommendation");
    }

    Ok(Analysis {
        config,
        seed: file.seed,
        session,
        summaries,
        recommendations,
        ensemble,
    })
}
