//! Rate and risk from event counts, and conversion between the two.

use crate::error::{Result, ValidationError, Warning};

/// Multiplier used when the entered one is missing or not positive
pub const DEFAULT_MULTIPLIER: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    #[default]
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [TimeUnit::Day, TimeUnit::Week, TimeUnit::Month, TimeUnit::Year];

    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            TimeUnit::Day => TimeUnit::Week,
            TimeUnit::Week => TimeUnit::Month,
            TimeUnit::Month => TimeUnit::Year,
            TimeUnit::Year => TimeUnit::Day,
        }
    }
}

/// Inputs of the rate/risk calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateRiskInput {
    pub events: f64,
    pub population: f64,
    pub multiplier: f64,
    pub time_unit: TimeUnit,
}

impl Default for RateRiskInput {
    fn default() -> Self {
        Self {
            events: 50.0,
            population: 500_000.0,
            multiplier: DEFAULT_MULTIPLIER,
            time_unit: TimeUnit::Year,
        }
    }
}

impl RateRiskInput {
    pub fn compute(&self) -> Result<RateRiskResult> {
        compute_rate_risk(self.events, self.population, self.multiplier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateRiskResult {
    /// Proportion of the population with an event
    pub risk: f64,
    /// `risk` scaled by `multiplier`
    pub rate: f64,
    /// The multiplier actually applied (after fallback)
    pub multiplier: f64,
    pub warning: Option<Warning>,
}

/// Compute risk (`events / population`) and rate (`risk * multiplier`).
///
/// Population is validated before events. A non-positive or non-finite
/// multiplier falls back to [`DEFAULT_MULTIPLIER`]. More events than people is
/// allowed but flagged with [`Warning::EventsExceedPopulation`].
pub fn compute_rate_risk(events: f64, population: f64, multiplier: f64) -> Result<RateRiskResult> {
    if population.is_nan() || population <= 0.0 {
        return Err(ValidationError::NonPositivePopulation);
    }
    if events < 0.0 || events.is_nan() {
        return Err(ValidationError::NegativeEvents);
    }

    let multiplier = if multiplier.is_finite() && multiplier > 0.0 {
        multiplier
    } else {
        DEFAULT_MULTIPLIER
    };

    let risk = events / population;
    let warning = (events > population).then_some(Warning::EventsExceedPopulation);

    Ok(RateRiskResult {
        risk,
        rate: risk * multiplier,
        multiplier,
        warning,
    })
}

/// Risk over `time` for a constant rate: `1 - e^(-rate * time)`.
pub fn risk_from_rate(rate: f64, time: f64) -> Result<f64> {
    if rate < 0.0 || rate.is_nan() {
        return Err(ValidationError::NegativeRate);
    }
    if time < 0.0 || time.is_nan() {
        return Err(ValidationError::NegativeTime);
    }
    Ok(-(-rate * time).exp_m1())
}

/// Constant rate that produces `risk` over `time`: `-ln(1 - risk) / time`.
///
/// A risk of exactly 1 yields `f64::INFINITY`.
pub fn rate_from_risk(risk: f64, time: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&risk) {
        return Err(ValidationError::RiskOutOfRange);
    }
    if time.is_nan() || time <= 0.0 {
        return Err(ValidationError::NonPositiveTime);
    }
    if risk == 1.0 {
        return Ok(f64::INFINITY);
    }
    Ok(-(-risk).ln_1p() / time)
}

/// Risk as a percentage with four significant digits, e.g. `0.0100%`.
pub fn format_risk_percent(risk: f64) -> String {
    format!("{}%", to_significant(risk * 100.0, 4))
}

/// Format with `digits` significant digits, keeping trailing zeros.
pub fn to_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }
    if value == 0.0 {
        return format!("{:.*}", digits.saturating_sub(1), 0.0);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let rounded = format!("{:.*}", decimals, value);
    // Rounding can carry into a new digit (9.9996 -> 10.000); drop one decimal then
    let carried = rounded
        .trim_start_matches('-')
        .parse::<f64>()
        .map(|v| v.abs().log10().floor() as i32 > magnitude)
        .unwrap_or(false);
    if carried && decimals > 0 {
        format!("{:.*}", decimals - 1, value)
    } else {
        rounded
    }
}
