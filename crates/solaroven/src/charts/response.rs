//! Solar radiation vs temperature scatter plot.

use ratatui::layout::Constraint;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition};
use solaroven_core::OvenType;

use super::{ChartSize, oven_marker, oven_style, render_widget};
use crate::Analysis;
use crate::format::{axis_labels, format_ratio, padded_bounds};

pub fn render(analysis: &Analysis, size: ChartSize) -> String {
    let series: Vec<(OvenType, Vec<(f64, f64)>)> = OvenType::ALL
        .iter()
        .map(|&oven| (oven, analysis.session.response_series(oven)))
        .collect();

    let fold_bounds = |pick: fn(&(f64, f64)) -> f64| {
        series
            .iter()
            .flat_map(|(_, points)| points.iter().map(pick))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    };
    let (x_lo, x_hi) = fold_bounds(|p: &(f64, f64)| p.0);
    let (y_lo, y_hi) = fold_bounds(|p: &(f64, f64)| p.1);
    let x_bounds = padded_bounds(x_lo, x_hi, 50.0);
    let y_bounds = padded_bounds(y_lo, y_hi, 10.0);

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(oven, points)| {
            let (marker, glyph) = oven_marker(*oven);
            let correlation = analysis
                .summaries
                .iter()
                .find(|s| s.oven_type == *oven)
                .and_then(|s| s.radiation_correlation);
            Dataset::default()
                .name(format!("{glyph} {oven} (r={})", format_ratio(correlation)))
                .marker(marker)
                .graph_type(GraphType::Scatter)
                .style(oven_style(*oven))
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::bordered().title("Solar Radiation vs Temperature Response"))
        .x_axis(
            Axis::default()
                .title("Solar Radiation (W/m²)")
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds, 5)),
        )
        .y_axis(
            Axis::default()
                .title("Temperature (°C)")
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds, 5)),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)));

    render_widget(chart, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisFile, run_analysis};

    #[test]
    fn test_scatter_legend_carries_correlation() {
        let analysis = run_analysis(&AnalysisFile::default()).unwrap();
        let text = render(&analysis, ChartSize::new(100, 30));
        assert!(text.contains("Solar Radiation vs Temperature Response"));
        assert!(text.contains("Funnel (r="));
    }
}
