//! Mapping chart data into pixel space.
//!
//! Screen space has its origin at the top-left with y growing downward; data
//! space grows upward. [`ChartFrame`] maps one to the other inside a padded
//! plotting area and inverts the y axis on the way.

pub mod series;

use std::fmt::Write;

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No validation is performed: a degenerate input interval (`in_min ==
/// in_max`) produces NaN or infinity, so callers must guard it.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// A point in data coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A closed interval of data values along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0 || !self.span().is_finite()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// `count` evenly spaced values from `min` to `max` inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            n => (0..n)
                .map(|i| self.min + self.span() * i as f64 / (n - 1) as f64)
                .collect(),
        }
    }

    /// Smallest domain covering every value, or `None` for an empty or
    /// non-finite set.
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        (min <= max).then_some(Self { min, max })
    }
}

/// A padded plotting area together with the data domains it displays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub x_domain: Domain,
    pub y_domain: Domain,
}

impl ChartFrame {
    pub const fn new(width: f64, height: f64, padding: f64, x_domain: Domain, y_domain: Domain) -> Self {
        Self {
            width,
            height,
            padding,
            x_domain,
            y_domain,
        }
    }

    /// Frame used by the rate-vs-risk chart.
    pub const fn risk_vs_rate() -> Self {
        Self::new(700.0, 420.0, 60.0, Domain::new(0.0, 1.0), Domain::new(0.0, series::RATE_Y_MAX))
    }

    /// Frame used by the survival curve.
    pub const fn survival() -> Self {
        Self::new(700.0, 400.0, 60.0, Domain::new(0.0, 115.0), Domain::new(0.0, 100_000.0))
    }

    /// Frame used by the cumulative disease risk chart (risk in percent).
    pub const fn cumulative_risk() -> Self {
        Self::new(700.0, 400.0, 60.0, Domain::new(0.0, 80.0), Domain::new(0.0, series::MAX_RISK_PERCENT))
    }

    pub fn x_to_screen(&self, x: f64) -> f64 {
        map_range(
            x,
            self.x_domain.min,
            self.x_domain.max,
            self.padding,
            self.width - self.padding,
        )
    }

    /// Data y to pixel y. The domain maximum lands on the top padding line.
    pub fn y_to_screen(&self, y: f64) -> f64 {
        map_range(
            y,
            self.y_domain.min,
            self.y_domain.max,
            self.height - self.padding,
            self.padding,
        )
    }

    pub fn project(&self, point: PlotPoint) -> ScreenPoint {
        ScreenPoint::new(self.x_to_screen(point.x), self.y_to_screen(point.y))
    }

    pub fn polyline(&self, points: &[PlotPoint]) -> Vec<ScreenPoint> {
        points.iter().map(|p| self.project(*p)).collect()
    }

    /// SVG path data for a polyline through the mapped points.
    pub fn svg_path(&self, points: &[PlotPoint]) -> String {
        svg_path(&self.polyline(points))
    }
}

/// `M x,y L x,y ...` with two decimals; empty for no points.
pub fn svg_path(points: &[ScreenPoint]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(path, "{cmd} {:.2},{:.2}", p.x, p.y);
    }
    path
}
