//! Horizontal bars and fill gauges with eighth-cell precision.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Block characters for sub-character precision (from empty to full)
const EIGHTHS: [&str; 9] = [" ", "▏", "▎", "▍", "▌", "▋", "▊", "▉", "█"];

/// A bar `width` cells wide filled to `fraction` (clamped to 0..=1).
pub fn bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let eighths = (fraction * (width * 8) as f64).round() as usize;
    let full = eighths / 8;
    let partial = eighths % 8;

    let mut s = "█".repeat(full);
    if full < width {
        s.push_str(EIGHTHS[partial]);
        s.push_str(&" ".repeat(width - full - 1));
    }
    s
}

/// A vertical tank filled from the bottom to `fraction` of its height.
pub fn render_level(frame: &mut Frame, area: Rect, fraction: f64, color: Color) {
    let height = area.height as usize;
    if height == 0 || area.width < 3 {
        return;
    }
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let inner_width = area.width as usize - 2;
    let filled_rows = (fraction * height as f64).round() as usize;

    let lines: Vec<Line> = (0..height)
        .map(|row| {
            let from_bottom = height - row;
            let fill = if from_bottom <= filled_rows { "█" } else { " " };
            Line::from(vec![
                Span::raw("│"),
                Span::styled(fill.repeat(inner_width), Style::default().fg(color)),
                Span::raw("│"),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
