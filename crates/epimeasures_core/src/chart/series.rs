//! Data series plotted by the explainer's charts.

use super::PlotPoint;

/// Top of the rate axis on the rate-vs-risk chart
pub const RATE_Y_MAX: f64 = 2.5;
/// Display cap on the cumulative risk chart, in percent
pub const MAX_RISK_PERCENT: f64 = 6.0;
/// Annual incidence used by the cumulative risk chart (1% per decade)
pub const ANNUAL_DISEASE_INCIDENCE: f64 = 0.001;
/// Age at which disease risk starts accumulating
pub const RISK_ONSET_AGE: u32 = 30;
/// Age tick labels of the cumulative risk chart
pub const CUMULATIVE_RISK_X_LABELS: [f64; 8] = [0.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];

/// A named line on a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<PlotPoint>,
}

impl Series {
    pub fn new(name: &'static str, points: Vec<PlotPoint>) -> Self {
        Self { name, points }
    }

    /// Linear interpolation of y at `x`, or `None` outside the series.
    pub fn value_at(&self, x: f64) -> Option<f64> {
        let first = self.points.first()?;
        if x < first.x {
            return None;
        }
        self.points.windows(2).find_map(|w| {
            let (a, b) = (w[0], w[1]);
            (x >= a.x && x <= b.x).then(|| {
                if b.x == a.x {
                    a.y
                } else {
                    a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x)
                }
            })
        })
        .or_else(|| (self.points.len() == 1 && x == first.x).then_some(first.y))
    }
}

/// Risk (the identity line) and the constant rate producing that risk in one
/// time unit, sampled at `p = i/100`.
///
/// The rate line stops one sample short because `-ln(1 - p)` explodes toward
/// `p = 1`.
pub fn risk_vs_rate_series() -> (Series, Series) {
    let risk = (0..100)
        .map(|i| {
            let p = i as f64 / 100.0;
            PlotPoint::new(p, p)
        })
        .collect();
    let rate = (0..99)
        .map(|i| {
            let p = i as f64 / 100.0;
            PlotPoint::new(p, -(-p).ln_1p())
        })
        .collect();
    (Series::new("Risk", risk), Series::new("Rate", rate))
}

/// Survivors out of 100,000 births by age.
pub const SURVIVAL_DATA: [(f64, f64); 15] = [
    (0.0, 100_000.0),
    (1.0, 99_300.0),
    (10.0, 99_100.0),
    (20.0, 98_800.0),
    (30.0, 98_200.0),
    (40.0, 97_200.0),
    (50.0, 95_500.0),
    (60.0, 92_500.0),
    (70.0, 86_000.0),
    (80.0, 72_000.0),
    (90.0, 45_000.0),
    (100.0, 15_000.0),
    (105.0, 4_000.0),
    (110.0, 500.0),
    (115.0, 0.0),
];

pub fn survival_curve() -> Series {
    Series::new(
        "Survivors",
        SURVIVAL_DATA
            .iter()
            .map(|&(age, survivors)| PlotPoint::new(age, survivors))
            .collect(),
    )
}

/// Probability of still being alive at `age` in the cumulative risk model:
/// 1 until the onset age, linearly down to 0.7 at 70, then to 0.4 at 80.
pub fn competing_survival(age: f64) -> f64 {
    let onset = RISK_ONSET_AGE as f64;
    if age <= onset {
        1.0
    } else if age <= 70.0 {
        1.0 - ((age - onset) / 40.0) * 0.3
    } else {
        0.7 - ((age - 70.0) / 10.0) * 0.3
    }
}

/// One age of the cumulative risk chart, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeRiskPoint {
    pub age: f64,
    pub unadjusted: f64,
    pub adjusted: f64,
}

/// Cumulative disease risk from birth to 80, with and without competing
/// mortality. Both values are capped at [`MAX_RISK_PERCENT`].
pub fn cumulative_risk_points() -> Vec<CumulativeRiskPoint> {
    (0..=80u32)
        .map(|age| {
            let age = age as f64;
            let unadjusted = if age >= RISK_ONSET_AGE as f64 {
                (age - RISK_ONSET_AGE as f64) * ANNUAL_DISEASE_INCIDENCE * 100.0
            } else {
                0.0
            };
            let adjusted = unadjusted * competing_survival(age);
            CumulativeRiskPoint {
                age,
                unadjusted: unadjusted.min(MAX_RISK_PERCENT),
                adjusted: adjusted.min(MAX_RISK_PERCENT),
            }
        })
        .collect()
}

/// The cumulative risk data split into an unadjusted and adjusted line.
pub fn cumulative_risk_series() -> (Series, Series) {
    let points = cumulative_risk_points();
    let unadjusted = points
        .iter()
        .map(|p| PlotPoint::new(p.age, p.unadjusted))
        .collect();
    let adjusted = points
        .iter()
        .map(|p| PlotPoint::new(p.age, p.adjusted))
        .collect();
    (
        Series::new("Without competing mortality", unadjusted),
        Series::new("Adjusted for survival", adjusted),
    )
}
