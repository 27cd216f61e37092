//! Plain-text report sections
//!
//! Sections follow the order of a reading: dataset, statistics, efficiency,
//! time to cooking temperature, ensemble spread, then qualitative guidance.

use solaroven_core::analysis::EnsembleReport;
use solaroven_core::{CookingPhase, OvenType};

use crate::Analysis;
use crate::format::{format_minutes, format_percentage, format_ratio, format_temperature};

fn heading(title: &str, width: usize) -> Vec<String> {
    vec![title.to_string(), "=".repeat(width)]
}

fn banner(analysis: &Analysis) -> Vec<String> {
    let ovens: Vec<&str> = OvenType::ALL.iter().map(|o| o.label()).collect();
    let mut lines = heading("Solar Oven Efficiency Analysis", 50);
    lines.push(format!(
        "Dataset created: {} measurements",
        analysis.session.readings.len()
    ));
    lines.push(format!("Oven types: {}", ovens.join(", ")));
    lines.push(format!(
        "Duration: {:.0} minutes (sampled every {} minutes)",
        analysis.session.duration_minutes(),
        analysis.config.sample_interval_minutes
    ));
    lines.push(format!(
        "Ambient: {}, cooking threshold: {}",
        format_temperature(analysis.config.ambient_temp_c),
        format_temperature(analysis.config.cooking_threshold_c)
    ));
    lines.push(format!("Seed: {}", analysis.seed));
    lines
}

fn temperature_statistics(analysis: &Analysis) -> Vec<String> {
    let mut lines = heading("TEMPERATURE STATISTICS BY OVEN TYPE", 40);
    lines.push(format!(
        "{:<12}{:>10}{:>10}{:>10}{:>10}",
        "Oven", "mean", "max", "min", "std"
    ));
    for s in &analysis.summaries {
        lines.push(format!(
            "{:<12}{:>10.2}{:>10.2}{:>10.2}{:>10.2}",
            s.oven_type.label(),
            s.mean_temp_c,
            s.peak_temp_c,
            s.min_temp_c,
            s.std_dev_c
        ));
    }
    lines
}

fn efficiency_analysis(analysis: &Analysis) -> Vec<String> {
    let mut lines = heading("EFFICIENCY ANALYSIS", 25);
    lines.push(format!(
        "{:<12}{:>10}{:>10}{:>12}{:>12}{:>10}{:>8}",
        "Oven", "Avg_Temp", "Max_Temp", "Avg_Solar", "Efficiency", "vs Base", "r"
    ));
    for s in &analysis.summaries {
        lines.push(format!(
            "{:<12}{:>10.2}{:>10.2}{:>12.2}{:>12.2}{:>10}{:>8}",
            s.oven_type.label(),
            s.mean_temp_c,
            s.peak_temp_c,
            s.mean_solar_input,
            s.efficiency_ratio,
            format_ratio(s.baseline_ratio),
            format_ratio(s.radiation_correlation),
        ));
    }
    lines.push(format!(
        "Baseline: {} oven; r = radiation/temperature correlation",
        analysis.config.baseline
    ));
    lines
}

fn phase_averages(analysis: &Analysis) -> Vec<String> {
    let mut lines = heading("AVERAGE TEMPERATURE BY COOKING PHASE", 40);
    let mut header = format!("{:<12}", "Oven");
    for phase in CookingPhase::ALL {
        header.push_str(&format!("{:>14}", phase.label()));
    }
    lines.push(header);
    for s in &analysis.summaries {
        let mut row = format!("{:<12}", s.oven_type.label());
        for phase in CookingPhase::ALL {
            let cell = s
                .phase_means
                .get(&phase)
                .map_or_else(|| "-".to_string(), |m| format!("{m:.2}"));
            row.push_str(&format!("{cell:>14}"));
        }
        lines.push(row);
    }
    lines
}

fn time_to_cooking(analysis: &Analysis) -> Vec<String> {
    let threshold = analysis.config.cooking_threshold_c;
    let mut lines = heading(
        &format!("TIME TO COOKING TEMPERATURE ({threshold:.0}°C)"),
        35,
    );
    for s in &analysis.summaries {
        let line = match s.time_to_cooking_minutes {
            Some(_) => format!(
                "{}: {}",
                s.oven_type.label(),
                format_minutes(s.time_to_cooking_minutes)
            ),
            None => format!("{}: Never reached cooking temperature", s.oven_type.label()),
        };
        lines.push(line);
    }
    lines
}

fn ensemble_section(ensemble: &EnsembleReport) -> Vec<String> {
    let mut lines = heading(
        &format!("MONTE CARLO SPREAD ({} sessions)", ensemble.num_iterations),
        40,
    );
    lines.push(format!(
        "{:<12}{:>24}{:>24}{:>10}{:>12}",
        "Oven", "mean P5/P50/P95", "peak P5/P50/P95", "reach", "cook P50"
    ));
    for oven in &ensemble.ovens {
        let mean = &oven.mean_temp;
        let peak = &oven.peak_temp;
        lines.push(format!(
            "{:<12}{:>24}{:>24}{:>10}{:>12}",
            oven.oven_type.label(),
            format!("{:.1}/{:.1}/{:.1}", mean.p5, mean.p50, mean.p95),
            format!("{:.1}/{:.1}/{:.1}", peak.p5, peak.p50, peak.p95),
            format_percentage(oven.reach_rate),
            format_minutes(oven.time_to_cooking.map(|t| t.p50)),
        ));
    }
    for tally in &ensemble.recommendations {
        if let Some((oven, wins)) = tally.leader() {
            lines.push(format!(
                "{}: {} won {} of {} sessions",
                tally.need, oven, wins, ensemble.num_iterations
            ));
        }
    }
    lines
}

fn insights() -> Vec<String> {
    let mut lines = heading("SUSTAINABILITY INSIGHTS", 30);
    for oven in OvenType::ALL {
        lines.push(format!("• {} ovens: {}", oven.label(), oven.insight()));
    }
    lines
}

fn recommendations(analysis: &Analysis) -> Vec<String> {
    let mut lines = heading("COOKING RECOMMENDATIONS", 25);
    for rec in &analysis.recommendations {
        lines.push(format!(
            "• {} ({}): {} oven, {}",
            rec.need.dishes(),
            rec.need,
            rec.oven,
            rec.reason()
        ));
    }
    lines
}

fn environmental_impact() -> Vec<String> {
    let mut lines = heading("ENVIRONMENTAL IMPACT", 25);
    lines.extend(
        [
            "• Zero CO2 emissions during cooking",
            "• Reduces dependence on fossil fuels",
            "• Can be built with recycled materials",
            "• Ideal for off-grid communities",
        ]
        .map(String::from),
    );
    lines
}

/// Render the full text report
pub fn render_report(analysis: &Analysis) -> String {
    let mut sections = vec![
        banner(analysis),
        temperature_statistics(analysis),
        efficiency_analysis(analysis),
        phase_averages(analysis),
        time_to_cooking(analysis),
    ];
    if let Some(ensemble) = &analysis.ensemble {
        sections.push(ensemble_section(ensemble));
    }
    sections.push(insights());
    sections.push(recommendations(analysis));
    sections.push(environmental_impact());

    let mut out = sections
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}
