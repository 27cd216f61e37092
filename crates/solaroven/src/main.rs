use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use solaroven::charts::{self, ChartSize};
use solaroven::{AnalysisFile, export, init_logging, report, run_analysis};

#[derive(Parser, Debug)]
#[command(name = "solaroven")]
#[command(about = "Compare simulated efficiency of box, parabolic and funnel solar ovens")]
struct Args {
    /// Analysis file (YAML); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the simulated session (overrides the analysis file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of Monte Carlo sessions (overrides the analysis file)
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Directory for report, charts, readings and summary files
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Chart width in characters
    #[arg(long, default_value_t = 80)]
    chart_width: u16,

    /// Chart height in lines
    #[arg(long, default_value_t = 20)]
    chart_height: u16,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.out_dir.as_deref(), &args.log_level)?;

    let file = match &args.config {
        Some(path) => AnalysisFile::load(path)?,
        None => AnalysisFile::default(),
    }
    .with_overrides(args.seed, args.iterations);

    let analysis = run_analysis(&file).wrap_err("simulation failed")?;

    let report_text = report::render_report(&analysis);
    let charts_text = (!args.no_charts).then(|| {
        charts::render_all(&analysis, ChartSize::new(args.chart_width, args.chart_height))
    });

    println!("{report_text}");
    if let Some(charts_text) = &charts_text {
        println!("{charts_text}");
    }

    if let Some(out_dir) = &args.out_dir {
        let files = export::export(&analysis, &report_text, charts_text.as_deref(), out_dir)?;
        tracing::info!(summary = %files.summary.display(), "wrote results");
    }

    Ok(())
}
