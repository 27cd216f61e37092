//! Pick an oven per cooking need from session summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::summary::EfficiencySummary;
use crate::model::{OvenProfiles, OvenType};

/// What the cook needs from the oven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Need {
    /// Highest peak temperature
    HighHeat,
    /// Best heat retention late in the session
    SteadyCooking,
    /// Most temperature rise per unit build cost
    Balanced,
}

impl Need {
    pub const ALL: [Need; 3] = [Need::HighHeat, Need::SteadyCooking, Need::Balanced];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Need::HighHeat => "High heat",
            Need::SteadyCooking => "Steady cooking",
            Need::Balanced => "Balanced",
        }
    }

    /// Dishes that typically call for this need
    #[must_use]
    pub fn dishes(self) -> &'static str {
        match self {
            Need::HighHeat => "Meat/Vegetables",
            Need::SteadyCooking => "Bread/Rice",
            Need::Balanced => "Stews/Soups",
        }
    }

    /// Score an oven for this need (higher is better)
    fn score(self, summary: &EfficiencySummary, profiles: &OvenProfiles) -> Option<f64> {
        match self {
            Need::HighHeat => Some(summary.peak_temp_c),
            Need::SteadyCooking => summary.retention_ratio,
            Need::Balanced => {
                Some(summary.mean_rise_c / profiles.get(summary.oven_type).build_cost)
            }
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub need: Need,
    pub oven: OvenType,
    pub score: f64,
}

impl Recommendation {
    /// One-line justification for reports
    #[must_use]
    pub fn reason(&self) -> String {
        match self.need {
            Need::HighHeat => format!("peak of {:.1}°C", self.score),
            Need::SteadyCooking => format!(
                "keeps {:.0}% of its cooking-phase rise during maintenance",
                self.score * 100.0
            ),
            Need::Balanced => format!("{:.1}°C of rise per unit of build cost", self.score),
        }
    }
}

/// Best oven for each need.
///
/// Ovens without a score for a need are skipped; ties go to the oven that
/// comes first in `summaries`. Needs no oven can be scored for are omitted.
#[must_use]
pub fn recommend(summaries: &[EfficiencySummary], profiles: &OvenProfiles) -> Vec<Recommendation> {
    Need::ALL
        .iter()
        .filter_map(|&need| {
            let mut best: Option<Recommendation> = None;
            for summary in summaries {
                let Some(score) = need.score(summary, profiles) else {
                    continue;
                };
                if best.as_ref().is_none_or(|b| score > b.score) {
                    best = Some(Recommendation {
                        need,
                        oven: summary.oven_type,
                        score,
                    });
                }
            }
            best
        })
        .collect()
}
