//! Average temperature by cooking phase, grouped per oven.

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block};
use solaroven_core::{CookingPhase, OvenType};

use super::{ChartSize, render_widget};
use crate::Analysis;

fn phase_style(phase: CookingPhase) -> Style {
    let color = match phase {
        CookingPhase::Warmup => Color::Green,
        CookingPhase::Cooking => Color::Magenta,
        CookingPhase::Maintenance => Color::Blue,
    };
    Style::default().fg(color)
}

/// Single-letter bar label (W, C, M)
fn phase_initial(phase: CookingPhase) -> &'static str {
    &phase.label()[..1]
}

pub fn render(analysis: &Analysis, size: ChartSize) -> String {
    let groups: Vec<(OvenType, Vec<Bar>)> = analysis
        .summaries
        .iter()
        .map(|summary| {
            let bars = CookingPhase::ALL
                .iter()
                .filter_map(|phase| {
                    summary.phase_means.get(phase).map(|mean| {
                        Bar::default()
                            .value(mean.max(0.0).round() as u64)
                            .text_value(format!("{mean:.0}"))
                            .label(Line::from(phase_initial(*phase)))
                            .style(phase_style(*phase))
                    })
                })
                .collect();
            (summary.oven_type, bars)
        })
        .collect();

    let legend = CookingPhase::ALL
        .iter()
        .map(|p| format!("{}={}", phase_initial(*p), p.label()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut chart = BarChart::default()
        .block(
            Block::bordered()
                .title("Average Temperature by Cooking Phase (°C)")
                .title_bottom(legend),
        )
        .bar_width(5)
        .bar_gap(1)
        .group_gap(4);
    for (oven, bars) in &groups {
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(oven.label()))
                .bars(bars),
        );
    }

    render_widget(chart, size)
}
