//! A simplified life table, life expectancy and lifetime risk.
//!
//! Each age group's death rate is applied once to the survivors entering the
//! group. This is the teaching version of a period life table, not an
//! actuarial one: there is no separation of `q_x` and `m_x` within a group.

use crate::error::{Result, ValidationError, require_non_negative, require_positive};

/// Size of the hypothetical birth cohort
pub const DEFAULT_RADIX: f64 = 100_000.0;

/// One age group of the input table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeGroupRate {
    pub label: &'static str,
    pub start_age: f64,
    /// Width in years; `None` for the open-ended final group
    pub width: Option<f64>,
    pub death_rate_per_thousand: f64,
}

impl AgeGroupRate {
    pub const fn closed(label: &'static str, start_age: f64, width: f64, rate: f64) -> Self {
        Self {
            label,
            start_age,
            width: Some(width),
            death_rate_per_thousand: rate,
        }
    }

    pub const fn open(label: &'static str, start_age: f64, rate: f64) -> Self {
        Self {
            label,
            start_age,
            width: None,
            death_rate_per_thousand: rate,
        }
    }
}

/// A computed row of the life table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeTableRow {
    pub label: &'static str,
    pub start_age: f64,
    pub death_rate_per_thousand: f64,
    /// Survivors entering the group
    pub entering: f64,
    /// Deaths in the group, rounded to whole people
    pub deaths: f64,
    /// Survivors leaving the group
    pub survivors: f64,
    /// Person-years lived in the group
    pub person_years: f64,
    /// Expected remaining years for someone entering the group
    pub remaining_life: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifeTable {
    pub radix: f64,
    pub rows: Vec<LifeTableRow>,
}

impl LifeTable {
    /// Life expectancy at birth (remaining life of the first row).
    pub fn life_expectancy_at_birth(&self) -> f64 {
        self.rows.first().map_or(0.0, |r| r.remaining_life)
    }
}

/// Build a life table for a cohort of `radix` births.
///
/// Person-years in a closed group are `width * (entering + survivors) / 2`.
/// In the open-ended group everyone eventually dies, so person-years are
/// `entering / m` with `m` the group's death rate as a proportion.
pub fn build_life_table(radix: f64, groups: &[AgeGroupRate]) -> Result<LifeTable> {
    let radix = require_positive(radix, "Cohort size")?;
    if groups.is_empty() {
        return Err(ValidationError::EmptyLifeTable);
    }

    let mut rows = Vec::with_capacity(groups.len());
    let mut entering = radix;
    for group in groups {
        let rate = require_non_negative(group.death_rate_per_thousand)? / 1000.0;
        let deaths = (entering * rate).round().min(entering);
        let survivors = entering - deaths;
        let person_years = match group.width {
            Some(width) => require_positive(width, "Age group width")? * (entering + survivors) / 2.0,
            None => {
                let m = require_positive(rate, "Open-ended death rate")?;
                entering / m
            }
        };
        rows.push(LifeTableRow {
            label: group.label,
            start_age: group.start_age,
            death_rate_per_thousand: group.death_rate_per_thousand,
            entering,
            deaths,
            survivors,
            person_years,
            remaining_life: 0.0,
        });
        entering = survivors;
    }

    // Remaining life is the person-years still to be lived divided by those entering
    let mut remaining_person_years = 0.0;
    for row in rows.iter_mut().rev() {
        remaining_person_years += row.person_years;
        row.remaining_life = if row.entering > 0.0 {
            remaining_person_years / row.entering
        } else {
            0.0
        };
    }

    Ok(LifeTable { radix, rows })
}

/// Expected deaths per group, rounded, for a table's cohort.
pub fn expected_deaths(table: &LifeTable) -> Vec<f64> {
    table.rows.iter().map(|r| r.deaths).collect()
}

/// Life expectancy at birth for the given groups and a cohort of [`DEFAULT_RADIX`].
pub fn life_expectancy_at_birth(groups: &[AgeGroupRate]) -> Result<f64> {
    build_life_table(DEFAULT_RADIX, groups).map(|t| t.life_expectancy_at_birth())
}

/// The worked example: five age groups with rising death rates.
pub fn example_age_groups() -> [AgeGroupRate; 5] {
    [
        AgeGroupRate::closed("0–19", 0.0, 20.0, 2.0),
        AgeGroupRate::closed("20–39", 20.0, 20.0, 4.0),
        AgeGroupRate::closed("40–59", 40.0, 20.0, 10.0),
        AgeGroupRate::closed("60–79", 60.0, 20.0, 40.0),
        AgeGroupRate::open("80+", 80.0, 200.0),
    ]
}

// ============================================================================
// Lifetime risk
// ============================================================================

/// Lifetime risk ignoring competing mortality: a constant risk per interval
/// summed over `intervals`.
pub fn lifetime_risk(risk_per_interval: f64, intervals: u32) -> f64 {
    risk_per_interval * intervals as f64
}

/// Lifetime risk scaled by the fraction who survive other causes long enough.
pub fn adjusted_lifetime_risk(unadjusted: f64, survival_fraction: f64) -> f64 {
    unadjusted * survival_fraction.clamp(0.0, 1.0)
}

/// An interval of the lifetime-risk sum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInterval {
    /// Risk of developing the disease within the interval
    pub incidence: f64,
    /// Probability of surviving to the start of the interval
    pub survival: f64,
}

/// Lifetime risk adjusted for competing mortality: `Σ incidence_i × survival_i`.
pub fn lifetime_risk_with_survival(intervals: &[RiskInterval]) -> Result<f64> {
    intervals.iter().try_fold(0.0, |acc, interval| {
        let incidence = require_non_negative(interval.incidence)?;
        let survival = require_non_negative(interval.survival)?;
        Ok(acc + incidence * survival.min(1.0))
    })
}
