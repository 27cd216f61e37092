//! End-to-end analysis runs

use solaroven_core::error::{ConfigError, SimulationError};
use solaroven_core::{Need, OvenType};

use crate::charts::{self, ChartSize};
use crate::{AnalysisFile, run_analysis};

#[test]
fn test_default_analysis() {
    let analysis = run_analysis(&AnalysisFile::default()).unwrap();

    assert_eq!(analysis.seed, 42);
    assert_eq!(analysis.session.readings.len(), 72);
    assert_eq!(analysis.summaries.len(), 3);
    assert_eq!(analysis.recommendations.len(), Need::ALL.len());
    assert!(analysis.ensemble.is_none());
}

#[test]
fn test_repeated_runs_are_identical() {
    let file = AnalysisFile::default();
    let a = run_analysis(&file).unwrap();
    let b = run_analysis(&file).unwrap();
    assert_eq!(a.session, b.session);
    assert_eq!(a.summaries, b.summaries);
    assert_eq!(
        charts::render_all(&a, ChartSize::default()),
        charts::render_all(&b, ChartSize::default())
    );
}

#[test]
fn test_high_heat_goes_to_parabolic() {
    let analysis = run_analysis(&AnalysisFile::default()).unwrap();
    let high_heat = analysis
        .recommendations
        .iter()
        .find(|r| r.need == Need::HighHeat)
        .unwrap();
    assert_eq!(high_heat.oven, OvenType::Parabolic);
}

#[test]
fn test_ensemble_from_yaml() {
    let yaml = "seed: 3\niterations: 50\n";
    let file = AnalysisFile::from_yaml(yaml).unwrap();
    let analysis = run_analysis(&file).unwrap();
    let ensemble = analysis.ensemble.unwrap();
    assert_eq!(ensemble.num_iterations, 50);
    assert_eq!(ensemble.ovens.len(), 3);
}

#[test]
fn test_invalid_session_aborts_run() {
    let mut file = AnalysisFile::default();
    file.session.duration_minutes = -1.0;
    let err = run_analysis(&file).unwrap_err();
    assert_eq!(
        err,
        SimulationError::Config(ConfigError::InvalidSessionLength(-1.0))
    );
}

#[test]
fn test_all_charts_render() {
    let analysis = run_analysis(&AnalysisFile::default()).unwrap();
    let text = charts::render_all(&analysis, ChartSize::default());
    assert!(text.contains("Temperature Evolution by Oven Type"));
    assert!(text.contains("Temperature Distribution by Oven Type"));
    assert!(text.contains("Solar Radiation vs Temperature Response"));
    assert!(text.contains("Average Temperature by Cooking Phase"));
}

#[test]
fn test_zero_iterations_rejected() {
    let file = AnalysisFile {
        iterations: 0,
        ..Default::default()
    };
    assert_eq!(
        run_analysis(&file).unwrap_err(),
        SimulationError::NoIterations
    );
}
