//! Static text charts.
//!
//! Widgets are rendered into an off-screen ratatui buffer and read back as
//! plain text, so charts can be printed or written to a file without a
//! terminal.

pub mod distribution;
pub mod phases;
pub mod response;
pub mod temperature;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::Widget;
use solaroven_core::OvenType;

use crate::Analysis;

/// Chart dimensions in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u16,
    pub height: u16,
}

impl ChartSize {
    /// Smallest area a chart can be drawn in
    pub const MIN: ChartSize = ChartSize {
        width: 40,
        height: 12,
    };

    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(Self::MIN.width),
            height: height.max(Self::MIN.height),
        }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 20,
        }
    }
}

/// Marker and legend glyph per oven, so curves stay distinguishable without color
pub fn oven_marker(oven: OvenType) -> (Marker, &'static str) {
    match oven {
        OvenType::Box => (Marker::Dot, "•"),
        OvenType::Parabolic => (Marker::Block, "█"),
        OvenType::Funnel => (Marker::Bar, "▄"),
    }
}

pub fn oven_style(oven: OvenType) -> Style {
    let color = match oven {
        OvenType::Box => Color::Yellow,
        OvenType::Parabolic => Color::Red,
        OvenType::Funnel => Color::Cyan,
    };
    Style::default().fg(color)
}

/// Read a buffer back as text, one line per row with trailing blanks trimmed
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render a widget off-screen and return its text
pub fn render_widget<W: Widget>(widget: W, size: ChartSize) -> String {
    let area = Rect::new(0, 0, size.width, size.height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_to_text(&buf)
}

/// All four comparison charts, separated by blank lines
pub fn render_all(analysis: &Analysis, size: ChartSize) -> String {
    [
        temperature::render(analysis, size),
        distribution::render(analysis, size),
        response::render(analysis, size),
        phases::render(analysis, size),
    ]
    .join("\n")
}
