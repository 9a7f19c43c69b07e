//! Birth, fertility and perinatal rates.
//!
//! All rates here are expressed per 1,000.

use crate::error::{Result, ValidationError, require_non_negative, require_positive};

const PER_THOUSAND: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthRateInput {
    pub births: f64,
    pub total_population: f64,
    pub women_population: f64,
}

impl Default for BirthRateInput {
    fn default() -> Self {
        Self {
            births: 8_000.0,
            total_population: 600_000.0,
            women_population: 150_000.0,
        }
    }
}

impl BirthRateInput {
    pub fn compute(&self) -> Result<BirthRates> {
        compute_birth_rates(self.births, self.total_population, self.women_population)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthRates {
    /// Crude birth rate: births per 1,000 total population
    pub cbr: f64,
    /// General fertility rate: births per 1,000 women aged 15-44
    pub gfr: f64,
}

/// Crude birth rate and general fertility rate.
///
/// A zero denominator yields a rate of 0 rather than an error.
pub fn compute_birth_rates(births: f64, total_population: f64, women_population: f64) -> Result<BirthRates> {
    if [births, total_population, women_population]
        .iter()
        .any(|v| v.is_nan() || *v < 0.0)
    {
        return Err(ValidationError::NegativeInput);
    }
    if women_population > total_population {
        return Err(ValidationError::SubpopulationExceedsTotal);
    }

    let per_thousand = |denominator: f64| {
        if denominator > 0.0 {
            births / denominator * PER_THOUSAND
        } else {
            0.0
        }
    };

    Ok(BirthRates {
        cbr: per_thousand(total_population),
        gfr: per_thousand(women_population),
    })
}

/// Births per 1,000 women in one age group.
pub fn age_specific_fertility_rate(births: f64, women_in_group: f64) -> Result<f64> {
    let births = require_non_negative(births)?;
    let women = require_positive(women_in_group, "Women in age group")?;
    Ok(births / women * PER_THOUSAND)
}

/// Total fertility rate from age-specific rates given per 1,000 women.
///
/// Each rate is weighted by the width of its age group, so five-year groups
/// give `5 * sum(ASFR) / 1000` children per woman.
pub fn total_fertility_rate(asfrs_per_thousand: &[f64], group_width_years: f64) -> Result<f64> {
    let width = require_positive(group_width_years, "Age group width")?;
    let sum = asfrs_per_thousand
        .iter()
        .try_fold(0.0, |acc, &r| require_non_negative(r).map(|r| acc + r))?;
    Ok(width * sum / PER_THOUSAND)
}

/// Fetal deaths per 1,000 total births (live births plus fetal deaths).
pub fn fetal_death_rate(fetal_deaths: f64, live_births: f64) -> Result<f64> {
    let fetal_deaths = require_non_negative(fetal_deaths)?;
    let live_births = require_non_negative(live_births)?;
    let total = require_positive(fetal_deaths + live_births, "Total births")?;
    Ok(fetal_deaths / total * PER_THOUSAND)
}

/// Late fetal plus early neonatal deaths per 1,000 total births.
pub fn perinatal_mortality_rate(late_fetal_deaths: f64, early_neonatal_deaths: f64, live_births: f64) -> Result<f64> {
    let fetal = require_non_negative(late_fetal_deaths)?;
    let neonatal = require_non_negative(early_neonatal_deaths)?;
    let live_births = require_non_negative(live_births)?;
    let total = require_positive(live_births + fetal, "Total births")?;
    Ok((fetal + neonatal) / total * PER_THOUSAND)
}

/// Deaths under 28 days per 1,000 live births.
pub fn neonatal_mortality_rate(neonatal_deaths: f64, live_births: f64) -> Result<f64> {
    let deaths = require_non_negative(neonatal_deaths)?;
    let live_births = require_positive(live_births, "Live births")?;
    Ok(deaths / live_births * PER_THOUSAND)
}

/// Deaths under one year per 1,000 live births.
pub fn infant_mortality_rate(infant_deaths: f64, live_births: f64) -> Result<f64> {
    let deaths = require_non_negative(infant_deaths)?;
    let live_births = require_positive(live_births, "Live births")?;
    Ok(deaths / live_births * PER_THOUSAND)
}

/// Five-year ASFRs (15-19 through 40-44) from the worked TFR example.
pub const EXAMPLE_ASFRS: [f64; 6] = [25.0, 90.0, 110.0, 80.0, 40.0, 10.0];
