//! Temperature distribution box plot.
//!
//! Whiskers reach the furthest reading within 1.5 IQR of the box; readings
//! beyond that are drawn as outliers.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use solaroven_core::OvenType;
use solaroven_core::analysis::stats;

use super::{ChartSize, oven_style, render_widget};
use crate::Analysis;

const LABEL_WIDTH: usize = 11;

/// Five-number summary with outliers
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let q1 = stats::percentile(values, 0.25)?;
        let median = stats::percentile(values, 0.5)?;
        let q3 = stats::percentile(values, 0.75)?;
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside: Vec<f64> = values
            .iter()
            .copied()
            .filter(|v| (low_fence..=high_fence).contains(v))
            .collect();
        let outliers = values
            .iter()
            .copied()
            .filter(|v| !(low_fence..=high_fence).contains(v))
            .collect();

        Some(Self {
            lower_whisker: stats::min(&inside).unwrap_or(q1),
            q1,
            median,
            q3,
            upper_whisker: stats::max(&inside).unwrap_or(q3),
            outliers,
        })
    }
}

/// Map a value onto a column in `[0, width)`
fn column(value: f64, bounds: [f64; 2], width: usize) -> usize {
    if width <= 1 || bounds[1] <= bounds[0] {
        return 0;
    }
    let frac = ((value - bounds[0]) / (bounds[1] - bounds[0])).clamp(0.0, 1.0);
    (frac * (width - 1) as f64).round() as usize
}

/// Draw one horizontal box as characters
pub fn box_row(stats: &BoxStats, bounds: [f64; 2], width: usize) -> String {
    let mut cells = vec![' '; width];
    if width == 0 {
        return String::new();
    }

    let lw = column(stats.lower_whisker, bounds, width);
    let q1 = column(stats.q1, bounds, width);
    let med = column(stats.median, bounds, width);
    let q3 = column(stats.q3, bounds, width);
    let uw = column(stats.upper_whisker, bounds, width);

    for cell in &mut cells[lw..=uw] {
        *cell = '─';
    }
    for cell in &mut cells[q1..=q3] {
        *cell = '▒';
    }
    cells[lw] = '├';
    cells[uw] = '┤';
    cells[med] = '┃';
    for outlier in &stats.outliers {
        cells[column(*outlier, bounds, width)] = 'o';
    }

    cells.into_iter().collect()
}

pub fn render(analysis: &Analysis, size: ChartSize) -> String {
    let plot_width = (size.width as usize).saturating_sub(LABEL_WIDTH + 3).max(10);

    let boxes: Vec<(OvenType, BoxStats)> = OvenType::ALL
        .iter()
        .filter_map(|&oven| {
            let temps = analysis.session.temperatures_for(oven);
            BoxStats::from_values(&temps).map(|b| (oven, b))
        })
        .collect();

    let lo = boxes
        .iter()
        .flat_map(|(_, b)| b.outliers.iter().copied().chain([b.lower_whisker]))
        .fold(f64::INFINITY, f64::min);
    let hi = boxes
        .iter()
        .flat_map(|(_, b)| b.outliers.iter().copied().chain([b.upper_whisker]))
        .fold(f64::NEG_INFINITY, f64::max);
    let bounds = [lo, hi];

    let mut lines = vec![Line::from("")];
    for (oven, stats) in &boxes {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", oven.label()), oven_style(*oven)),
            Span::raw(box_row(stats, bounds, plot_width)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "{:<LABEL_WIDTH$}median {:.1}°C, IQR {:.1}-{:.1}°C",
                "", stats.median, stats.q1, stats.q3
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    if lo.is_finite() && hi.is_finite() {
        let left = format!("{lo:.0}°C");
        let right = format!("{hi:.0}°C");
        let gap = plot_width.saturating_sub(left.chars().count() + right.chars().count());
        lines.push(Line::from(format!(
            "{:<LABEL_WIDTH$}{left}{}{right}",
            "",
            " ".repeat(gap)
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::bordered().title("Temperature Distribution by Oven Type"));
    render_widget(paragraph, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_stats_without_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = BoxStats::from_values(&values).unwrap();
        assert_eq!(b.q1, 2.0);
        assert_eq!(b.median, 3.0);
        assert_eq!(b.q3, 4.0);
        assert_eq!(b.lower_whisker, 1.0);
        assert_eq!(b.upper_whisker, 5.0);
        assert!(b.outliers.is_empty());
    }

    #[test]
    fn test_box_stats_flags_outliers() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0, 100.0];
        let b = BoxStats::from_values(&values).unwrap();
        assert_eq!(b.outliers, vec![100.0]);
        assert_eq!(b.upper_whisker, 14.0);
    }

    #[test]
    fn test_box_row_layout() {
        let b = BoxStats {
            lower_whisker: 0.0,
            q1: 2.5,
            median: 5.0,
            q3: 7.5,
            upper_whisker: 10.0,
            outliers: vec![],
        };
        let row = box_row(&b, [0.0, 10.0], 11);
        assert_eq!(row.chars().count(), 11);
        assert!(row.starts_with('├'));
        assert!(row.ends_with('┤'));
        assert_eq!(row.chars().nth(5), Some('┃'));
    }

    #[test]
    fn test_render_lists_each_oven() {
        let analysis = crate::run_analysis(&crate::AnalysisFile::default()).unwrap();
        let text = render(&analysis, ChartSize::default());
        assert!(text.contains("Temperature Distribution by Oven Type"));
        for oven in OvenType::ALL {
            assert!(text.contains(oven.label()));
        }
    }
}
