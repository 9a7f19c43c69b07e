//! Line charts plotted onto a character grid.
//!
//! Series are mapped into cell space with the same [`ChartFrame`] mapping
//! the pixel charts use: the grid is a frame of `cols - 1` by `rows - 1`
//! "pixels" with no padding, so the domain maximum lands on the top row.

use epimeasures_core::{ChartFrame, Domain, PlotPoint, ScreenPoint, Series};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block};

/// Width of the y-axis label column
const Y_LABEL_WIDTH: usize = 8;

/// Cells of a `cols` × `rows` grid, each holding the index of the last
/// series drawn through it.
///
/// Degenerate domains or a grid smaller than 2×2 leave every cell empty.
/// Points outside the domains are clipped.
pub fn plot_cells(
    series: &[&Series],
    x_domain: Domain,
    y_domain: Domain,
    cols: usize,
    rows: usize,
) -> Vec<Vec<Option<usize>>> {
    let mut grid = vec![vec![None; cols]; rows];
    if cols < 2 || rows < 2 || x_domain.is_degenerate() || y_domain.is_degenerate() {
        return grid;
    }

    let frame = ChartFrame::new((cols - 1) as f64, (rows - 1) as f64, 0.0, x_domain, y_domain);
    let max_steps = 4 * (cols + rows);
    for (idx, s) in series.iter().enumerate() {
        let screen = frame.polyline(&s.points);
        if let [only] = screen.as_slice() {
            set_cell(&mut grid, *only, idx);
        }
        for segment in screen.windows(2) {
            draw_segment(&mut grid, segment[0], segment[1], idx, max_steps);
        }
    }
    grid
}

fn set_cell(grid: &mut [Vec<Option<usize>>], point: ScreenPoint, idx: usize) {
    if !point.x.is_finite() || !point.y.is_finite() {
        return;
    }
    let (col, row) = (point.x.round(), point.y.round());
    if col < 0.0 || row < 0.0 {
        return;
    }
    if let Some(cell) = grid
        .get_mut(row as usize)
        .and_then(|r| r.get_mut(col as usize))
    {
        *cell = Some(idx);
    }
}

fn draw_segment(
    grid: &mut [Vec<Option<usize>>],
    a: ScreenPoint,
    b: ScreenPoint,
    idx: usize,
    max_steps: usize,
) {
    let span = (b.x - a.x).abs().max((b.y - a.y).abs()).ceil();
    if !span.is_finite() {
        return;
    }
    let steps = (span as usize).clamp(1, max_steps);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let p = ScreenPoint::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
        set_cell(grid, p, idx);
    }
}

/// A row of `cols` characters with each tick label starting at its column,
/// shifted left where it would run past the end. Overlapping labels are
/// skipped.
pub fn axis_labels(ticks: &[f64], domain: Domain, cols: usize, format: fn(f64) -> String) -> String {
    let mut row = vec![' '; cols];
    if cols < 2 || domain.is_degenerate() {
        return String::new();
    }
    let frame = ChartFrame::new((cols - 1) as f64, 1.0, 0.0, domain, Domain::new(0.0, 1.0));

    let mut next_free = 0;
    for &tick in ticks {
        let label: Vec<char> = format(tick).chars().collect();
        let col = frame.x_to_screen(tick).round().max(0.0) as usize;
        let start = col.min(cols.saturating_sub(label.len()));
        if start < next_free || start + label.len() > cols {
            continue;
        }
        row[start..start + label.len()].copy_from_slice(&label);
        next_free = start + label.len() + 1;
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}

/// Configuration for rendering a line chart.
pub struct LineChart<'a> {
    title: &'a str,
    series: Vec<(&'a Series, Color)>,
    x_domain: Domain,
    y_domain: Domain,
    x_ticks: Vec<f64>,
    x_format: fn(f64) -> String,
    y_format: fn(f64) -> String,
    marker: Option<PlotPoint>,
    focused: bool,
}

impl<'a> LineChart<'a> {
    pub fn new(title: &'a str, x_domain: Domain, y_domain: Domain) -> Self {
        Self {
            title,
            series: Vec::new(),
            x_domain,
            y_domain,
            x_ticks: x_domain.ticks(5),
            x_format: |v| format!("{v:.0}"),
            y_format: |v| format!("{v:.1}"),
            marker: None,
            focused: false,
        }
    }

    pub fn series(mut self, series: &'a Series, color: Color) -> Self {
        self.series.push((series, color));
        self
    }

    pub fn x_ticks(mut self, ticks: &[f64]) -> Self {
        self.x_ticks = ticks.to_vec();
        self
    }

    pub fn x_format(mut self, format: fn(f64) -> String) -> Self {
        self.x_format = format;
        self
    }

    pub fn y_format(mut self, format: fn(f64) -> String) -> Self {
        self.y_format = format;
        self
    }

    /// Highlight one point, e.g. the current slider position.
    pub fn marker(mut self, point: Option<PlotPoint>) -> Self {
        self.marker = point;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn legend(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (series, color) in &self.series {
            spans.push(Span::styled("━━ ", Style::default().fg(*color)));
            spans.push(Span::raw(format!("{}   ", series.name)));
        }
        if self.marker.is_some() {
            spans.push(Span::styled("◆ ", Style::default().fg(FOCUS_COLOR)));
            spans.push(Span::raw("current"));
        }
        Line::from(spans)
    }

    fn y_label(&self, row: usize, rows: usize) -> String {
        let value = if row == 0 {
            Some(self.y_domain.max)
        } else if row == rows - 1 {
            Some(self.y_domain.min)
        } else if row == (rows - 1) / 2 {
            Some((self.y_domain.min + self.y_domain.max) / 2.0)
        } else {
            None
        };
        match value {
            Some(v) => format!("{:>width$} ", (self.y_format)(v), width = Y_LABEL_WIDTH - 1),
            None => " ".repeat(Y_LABEL_WIDTH),
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = focused_block(self.title, self.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 6 || (inner.width as usize) < Y_LABEL_WIDTH + 12 {
            let msg = Paragraph::new("Area too small").style(Style::default().fg(HELP_COLOR));
            frame.render_widget(msg, inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Legend
                Constraint::Min(0),    // Plot
                Constraint::Length(2), // Axis and tick labels
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(self.legend()), chunks[0]);

        let cols = inner.width as usize - Y_LABEL_WIDTH - 1;
        let rows = chunks[1].height as usize;
        let series: Vec<&Series> = self.series.iter().map(|(s, _)| *s).collect();
        let cells = plot_cells(&series, self.x_domain, self.y_domain, cols, rows);

        let marker_cell = self.marker.and_then(|point| {
            let marker_grid = plot_cells(
                &[&Series::new("", vec![point])],
                self.x_domain,
                self.y_domain,
                cols,
                rows,
            );
            marker_grid.iter().enumerate().find_map(|(r, row)| {
                row.iter().position(Option::is_some).map(|c| (r, c))
            })
        });

        let plot_lines: Vec<Line> = cells
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let mut spans = vec![
                    Span::styled(self.y_label(r, rows), Style::default().fg(HELP_COLOR)),
                    Span::styled("│", Style::default().fg(HELP_COLOR)),
                ];
                spans.extend(row.iter().enumerate().map(|(c, cell)| {
                    if marker_cell == Some((r, c)) {
                        Span::styled(
                            "◆",
                            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        match cell {
                            Some(idx) => Span::styled("•", Style::default().fg(self.series[*idx].1)),
                            None => Span::raw(" "),
                        }
                    }
                }));
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(plot_lines), chunks[1]);

        let indent = " ".repeat(Y_LABEL_WIDTH);
        let axis = vec![
            Line::from(Span::styled(
                format!("{indent}└{}", "─".repeat(cols)),
                Style::default().fg(HELP_COLOR),
            )),
            Line::from(Span::styled(
                format!(
                    "{indent} {}",
                    axis_labels(&self.x_ticks, self.x_domain, cols, self.x_format)
                ),
                Style::default().fg(HELP_COLOR),
            )),
        ];
        frame.render_widget(Paragraph::new(axis), chunks[2]);
    }
}
