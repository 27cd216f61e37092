//! Write analysis results to an output directory
//!
//! Directory structure:
//! {out_dir}/
//!   report.txt       # Text report
//!   charts.txt       # Static text charts (omitted with --no-charts)
//!   readings.json    # Every simulated reading
//!   summary.json     # Date, methodology, summaries, recommendations, ensemble

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use solaroven_core::analysis::EnsembleReport;
use solaroven_core::{EfficiencySummary, OvenReading, Recommendation, SessionConfig};

use crate::Analysis;

pub const REPORT_FILE: &str = "report.txt";
pub const CHARTS_FILE: &str = "charts.txt";
pub const READINGS_FILE: &str = "readings.json";
pub const SUMMARY_FILE: &str = "summary.json";

const METHODOLOGY: &str = "Comparative analysis of simulated solar oven designs";

/// Machine-readable results written to `summary.json`
#[derive(Debug, Serialize)]
pub struct ResultsSummary<'a> {
    pub analysis_date: jiff::civil::Date,
    pub methodology: &'static str,
    pub seed: u64,
    pub config: &'a SessionConfig,
    pub summaries: &'a [EfficiencySummary],
    pub recommendations: &'a [Recommendation],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ensemble: Option<&'a EnsembleReport>,
}

impl<'a> ResultsSummary<'a> {
    pub fn new(analysis: &'a Analysis, analysis_date: jiff::civil::Date) -> Self {
        Self {
            analysis_date,
            methodology: METHODOLOGY,
            seed: analysis.seed,
            config: &analysis.config,
            summaries: &analysis.summaries,
            recommendations: &analysis.recommendations,
            ensemble: analysis.ensemble.as_ref(),
        }
    }
}

/// Paths of the files written by `export`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub report: PathBuf,
    pub charts: Option<PathBuf>,
    pub readings: PathBuf,
    pub summary: PathBuf,
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).wrap_err_with(|| format!("failed to write {}", path.display()))
}

/// Write every output file into `out_dir`, creating it if needed.
///
/// The analysis date is today's date in the system time zone.
pub fn export(
    analysis: &Analysis,
    report: &str,
    charts: Option<&str>,
    out_dir: &Path,
) -> Result<ExportedFiles> {
    export_dated(
        analysis,
        report,
        charts,
        out_dir,
        jiff::Zoned::now().date(),
    )
}

/// `export` with an explicit analysis date
pub fn export_dated(
    analysis: &Analysis,
    report: &str,
    charts: Option<&str>,
    out_dir: &Path,
    analysis_date: jiff::civil::Date,
) -> Result<ExportedFiles> {
    std::fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("failed to create output directory {}", out_dir.display()))?;

    let report_path = out_dir.join(REPORT_FILE);
    write_file(&report_path, report)?;

    let charts_path = match charts {
        Some(text) => {
            let path = out_dir.join(CHARTS_FILE);
            write_file(&path, text)?;
            Some(path)
        }
        None => None,
    };

    let readings: &[OvenReading] = &analysis.session.readings;
    let readings_path = out_dir.join(READINGS_FILE);
    let readings_json =
        serde_json::to_string_pretty(readings).wrap_err("failed to serialize readings")?;
    write_file(&readings_path, &readings_json)?;

    let summary = ResultsSummary::new(analysis, analysis_date);
    let summary_path = out_dir.join(SUMMARY_FILE);
    let summary_json =
        serde_json::to_string_pretty(&summary).wrap_err("failed to serialize summary")?;
    write_file(&summary_path, &summary_json)?;

    tracing::info!(out_dir = %out_dir.display(), "exported results");

    Ok(ExportedFiles {
        report: report_path,
        charts: charts_path,
        readings: readings_path,
        summary: summary_path,
    })
}
