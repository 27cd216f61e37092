//! Statistics, summaries and recommendations derived from simulated sessions.

pub mod ensemble;
pub mod recommendation;
pub mod stats;
pub mod summary;

pub use ensemble::{
    EnsembleReport, EnsembleSummary, MetricDistribution, RecommendationTally, summarize_ensemble,
};
pub use recommendation::{Need, Recommendation, recommend};
pub use summary::{EfficiencySummary, summarize, time_to_temperature};
