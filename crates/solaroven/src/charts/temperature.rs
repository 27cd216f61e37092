//! Temperature evolution line chart with the cooking threshold.

use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition};
use solaroven_core::OvenType;

use super::{ChartSize, oven_marker, oven_style, render_widget};
use crate::Analysis;
use crate::format::{axis_labels, padded_bounds};

pub fn render(analysis: &Analysis, size: ChartSize) -> String {
    let series: Vec<(OvenType, Vec<(f64, f64)>)> = OvenType::ALL
        .iter()
        .map(|&oven| (oven, analysis.session.temperature_series(oven)))
        .collect();

    let threshold = analysis.config.cooking_threshold_c;
    let x_bounds = [0.0, analysis.session.duration_minutes().max(1.0)];
    let threshold_line = [(x_bounds[0], threshold), (x_bounds[1], threshold)];

    let (lo, hi) = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, t)| *t))
        .fold((threshold, threshold), |(lo, hi), t| (lo.min(t), hi.max(t)));
    let y_bounds = padded_bounds(lo.min(analysis.config.ambient_temp_c), hi, 10.0);

    let mut datasets: Vec<Dataset> = series
        .iter()
        .map(|(oven, points)| {
            let (marker, glyph) = oven_marker(*oven);
            Dataset::default()
                .name(format!("{glyph} {oven} Oven"))
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(oven_style(*oven))
                .data(points)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .name("· Cooking Threshold")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&threshold_line),
    );

    let chart = Chart::new(datasets)
        .block(Block::bordered().title("Temperature Evolution by Oven Type"))
        .x_axis(
            Axis::default()
                .title("Time (minutes)")
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
