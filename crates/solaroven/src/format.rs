//! Number formatting for reports and chart axes

/// Format a temperature in °C with one decimal
pub fn format_temperature(value: f64) -> String {
    format!("{:.1}°C", value)
}

/// Format a fraction as a percentage value
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format an optional duration in minutes, `never` when absent
pub fn format_minutes(value: Option<f64>) -> String {
    match value {
        Some(minutes) if minutes.fract() == 0.0 => format!("{minutes:.0} min"),
        Some(minutes) => format!("{minutes:.1} min"),
        None => "never".to_string(),
    }
}

/// Format an optional ratio, `n/a` when absent
pub fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

/// Round outward to a multiple of `step` so data never sits on the chart edge
pub fn padded_bounds(lo: f64, hi: f64, step: f64) -> [f64; 2] {
    let lo = (lo / step).floor() * step;
    let mut hi = (hi / step).ceil() * step;
    if hi <= lo {
        hi = lo + step;
    }
    [lo, hi]
}

/// `count` evenly spaced axis labels across `bounds`
pub fn axis_labels(bounds: [f64; 2], count: usize) -> Vec<String> {
    let count = count.max(2);
    let step = (bounds[1] - bounds[0]) / (count - 1) as f64;
    (0..count)
        .map(|i| format!("{:.0}", bounds[0] + step * i as f64))
        .collect()
}
