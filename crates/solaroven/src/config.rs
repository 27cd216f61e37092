//! Analysis file loading
//!
//! An analysis file is YAML; every key is optional:
//!
//! ```yaml
//! seed: 7
//! iterations: 500
//! session:
//!   duration_minutes: 180
//!   heat_gain_c: 120
//!   baseline: Funnel
//!   ovens:
//!     box:
//!       efficiency: 0.7
//!       thermal_mass: 0.8
//!       build_cost: 0.5
//! ```

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use solaroven_core::SessionConfig;

fn default_seed() -> u64 {
    42
}

fn default_iterations() -> usize {
    1
}

/// Top-level analysis file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFile {
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of Monte Carlo sessions; 1 runs a single session
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Default for AnalysisFile {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            iterations: default_iterations(),
            session: SessionConfig::default(),
        }
    }
}

impl AnalysisFile {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Read and parse an analysis file, validating the session parameters
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read analysis file {}", path.display()))?;
        let file = Self::from_yaml(&content)
            .wrap_err_with(|| format!("failed to parse analysis file {}", path.display()))?;
        file.session
            .validate()
            .wrap_err_with(|| format!("invalid session in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded analysis file");
        Ok(file)
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, seed: Option<u64>, iterations: Option<usize>) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(iterations) = iterations {
            self.iterations = iterations;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use solaroven_core::OvenType;

    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let file = AnalysisFile::from_yaml("{}").unwrap();
        assert_eq!(file, AnalysisFile::default());
    }

    #[test]
    fn test_partial_session_override() {
        let yaml = r#"
seed: 7
session:
  duration_minutes: 180
  baseline: Funnel
  ovens:
    box:
      efficiency: 0.7
      thermal_mass: 0.8
      build_cost: 0.5
"#;
        let file = AnalysisFile::from_yaml(yaml).unwrap();
        assert_eq!(file.seed, 7);
        assert_eq!(file.iterations, 1);
        assert_eq!(file.session.duration_minutes, 180.0);
        assert_eq!(file.session.sample_interval_minutes, 5.0);
        assert_eq!(file.session.baseline, OvenType::Funnel);
        assert_eq!(file.session.ovens.box_oven.efficiency, 0.7);
        assert_eq!(
            file.session.ovens.parabolic,
            solaroven_core::OvenProfile::PARABOLIC
        );
    }

    #[test]
    fn test_yaml_round_trip_preserves_noise_profiles() {
        let file = AnalysisFile::default();
        let yaml = file.to_yaml().unwrap();
        assert_eq!(AnalysisFile::from_yaml(&yaml).unwrap(), file);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file = AnalysisFile::default().with_overrides(Some(9), None);
        assert_eq!(file.seed, 9);
        assert_eq!(file.iterations, 1);
    }

    #[test]
    fn test_zero_iterations_override_is_kept() {
        let file = AnalysisFile::default().with_overrides(None, Some(0));
        assert_eq!(file.iterations, 0);
    }

    #[test]
    fn test_load_rejects_invalid_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "session:\n  duration_minutes: -10\n").unwrap();
        let err = AnalysisFile::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("session length"));
    }
}
