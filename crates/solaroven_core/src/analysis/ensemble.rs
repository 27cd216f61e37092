//! Distribution of summary statistics across Monte Carlo sessions.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::recommendation::{Need, recommend};
use crate::analysis::stats;
use crate::analysis::summary::{EfficiencySummary, summarize};
use crate::model::{MonteCarloResult, OvenType, SessionConfig};

/// Standard percentiles reported for ensemble metrics
pub mod standard {
    pub const P5: f64 = 0.05;
    pub const P50: f64 = 0.50;
    pub const P95: f64 = 0.95;
}

/// Spread of one metric across runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

impl MetricDistribution {
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Some(Self {
            mean: stats::mean(values)?,
            std_dev: stats::std_dev(values).unwrap_or(0.0),
            p5: stats::percentile(values, standard::P5)?,
            p50: stats::percentile(values, standard::P50)?,
            p95: stats::percentile(values, standard::P95)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleSummary {
    pub oven_type: OvenType,
    pub num_iterations: usize,
    pub mean_temp: MetricDistribution,
    pub peak_temp: MetricDistribution,
    /// Fraction of runs that reached the cooking threshold (0.0 to 1.0)
    pub reach_rate: f64,
    /// Over the runs that reached the threshold only
    pub time_to_cooking: Option<MetricDistribution>,
}

/// How often each oven won a need across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTally {
    pub need: Need,
    pub wins: BTreeMap<OvenType, usize>,
}

impl RecommendationTally {
    /// Oven with the most wins; ties go to the earlier oven type
    #[must_use]
    pub fn leader(&self) -> Option<(OvenType, usize)> {
        let mut leader: Option<(OvenType, usize)> = None;
        for (&oven, &count) in &self.wins {
            if leader.is_none_or(|(_, best)| count > best) {
                leader = Some((oven, count));
            }
        }
        leader
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleReport {
    pub num_iterations: usize,
    pub ovens: Vec<EnsembleSummary>,
    pub recommendations: Vec<RecommendationTally>,
}

/// Summarize every session in a Monte Carlo result.
#[must_use]
pub fn summarize_ensemble(mc: &MonteCarloResult, config: &SessionConfig) -> EnsembleReport {
    let mut per_oven: FxHashMap<OvenType, Vec<EfficiencySummary>> = FxHashMap::default();
    let mut tallies: FxHashMap<Need, BTreeMap<OvenType, usize>> = FxHashMap::default();

    for session in &mc.iterations {
        let summaries = summarize(session, config);
        for rec in recommend(&summaries, &config.ovens) {
            *tallies.entry(rec.need).or_default().entry(rec.oven).or_default() += 1;
        }
        for summary in summaries {
            per_oven.entry(summary.oven_type).or_default().push(summary);
        }
    }

    let ovens = OvenType::ALL
        .iter()
        .filter_map(|oven| {
            let runs = per_oven.get(oven)?;
            let means: Vec<f64> = runs.iter().map(|s| s.mean_temp_c).collect();
            let peaks: Vec<f64> = runs.iter().map(|s| s.peak_temp_c).collect();
            let cooking_times: Vec<f64> = runs
                .iter()
                .filter_map(|s| s.time_to_cooking_minutes)
                .collect();

            Some(EnsembleSummary {
                oven_type: *oven,
                num_iterations: runs.len(),
                mean_temp: MetricDistribution::from_values(&means)?,
                peak_temp: MetricDistribution::from_values(&peaks)?,
                reach_rate: cooking_times.len() as f64 / runs.len() as f64,
                time_to_cooking: MetricDistribution::from_values(&cooking_times),
            })
        })
        .collect();

    let recommendations = Need::ALL
        .iter()
        .filter_map(|need| {
            tallies.remove(need).map(|wins| RecommendationTally { need: *need, wins })
        })
        .collect();

    EnsembleReport {
        num_iterations: mc.iterations.len(),
        ovens,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_distribution_ordering() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let dist = MetricDistribution::from_values(&values).unwrap();
        assert!((dist.mean - 50.5).abs() < 1e-12);
        assert!(dist.p5 <= dist.p50 && dist.p50 <= dist.p95);
        assert!((dist.p50 - 50.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let dist = MetricDistribution::from_values(&[42.0]).unwrap();
        assert_eq!(dist.std_dev, 0.0);
        assert_eq!(dist.p5, 42.0);
        assert_eq!(dist.p95, 42.0);
    }

    #[test]
    fn test_tally_leader() {
        let tally = RecommendationTally {
            need: Need::HighHeat,
            wins: BTreeMap::from([(OvenType::Box, 3), (OvenType::Parabolic, 7)]),
        };
        assert_eq!(tally.leader(), Some((OvenType::Parabolic, 7)));
    }
}
