//! Solar oven simulation library
//!
//! This crate simulates cooking sessions for three solar oven designs
//! (box, parabolic, funnel) and summarizes how they perform:
//! - Seeded irradiance and temperature curves over a fixed session
//! - Per-oven statistics (mean, peak, spread, efficiency ratio, time to cook)
//! - Per-phase averages and radiation/temperature correlation
//! - Monte Carlo ensembles with percentile distributions
//! - A recommendation per cooking need
//!
//! ```ignore
//! use solaroven_core::{SessionConfig, simulate, summarize, recommend};
//!
//! let config = SessionConfig::default();
//! let result = simulate(&config, 42)?;
//! let summaries = summarize(&result, &config);
//! let picks = recommend(&summaries, &config.ovens);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{EfficiencySummary, EnsembleReport, Need, Recommendation, recommend, summarize};
pub use error::{ConfigError, SimulationError};
pub use model::{CookingPhase, OvenProfile, OvenReading, OvenType, SessionConfig, SessionResult};
pub use simulation::{monte_carlo_simulate, simulate};
