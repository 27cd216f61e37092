//! Type definitions for oven simulations
//!
//! - `oven` - oven designs and their thermal profiles
//! - `profiles` - irradiance and noise models
//! - `session` - session timing, phases and validation
//! - `results` - readings and simulation results

mod oven;
mod profiles;
mod results;
mod session;

pub use oven::{OvenProfile, OvenProfiles, OvenType};
pub use profiles::{NoiseProfile, RadiationProfile};
pub use results::{MonteCarloResult, OvenReading, SessionResult};
pub use session::{CookingPhase, MAX_SAMPLES, SessionConfig};
