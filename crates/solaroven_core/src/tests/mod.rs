//! Integration tests for the solar oven simulation engine
//!
//! Tests are organized by topic:
//! - `simulation` - Curve generation, bounds and determinism
//! - `summary` - Summaries computed from simulated sessions
//! - `ensemble` - Monte Carlo runs and their distributions

mod summary;
