//! Mortality, case fatality and related proportions.

use crate::error::{Result, ValidationError, require_non_negative, require_positive};

/// Deaths per `per` population.
pub fn mortality_rate(deaths: f64, population: f64, per: f64) -> Result<f64> {
    let deaths = require_non_negative(deaths)?;
    let population = require_positive(population, "Population")?;
    Ok(deaths / population * per)
}

/// Proportion of cases who die of the disease.
pub fn case_fatality_rate(deaths: f64, cases: f64) -> Result<f64> {
    let deaths = require_non_negative(deaths)?;
    let cases = require_positive(cases, "Number of cases")?;
    if deaths > cases {
        return Err(ValidationError::DeathsExceedCases);
    }
    Ok(deaths / cases)
}

/// Share of all deaths attributable to one cause.
pub fn proportional_mortality(cause_deaths: f64, all_deaths: f64) -> Result<f64> {
    let cause_deaths = require_non_negative(cause_deaths)?;
    let all_deaths = require_positive(all_deaths, "Total deaths")?;
    Ok(cause_deaths / all_deaths)
}

/// Share of treated patients who develop a complication.
pub fn complication_rate(complications: f64, treated: f64) -> Result<f64> {
    let complications = require_non_negative(complications)?;
    let treated = require_positive(treated, "Number treated")?;
    Ok(complications / treated)
}

/// Survival among cases: `1 - CFR`.
pub fn survival_from_cfr(cfr: f64) -> f64 {
    1.0 - cfr
}

/// Steady-state mortality from incidence and case fatality.
pub fn mortality_from_incidence(incidence: f64, cfr: f64) -> f64 {
    incidence * cfr
}

/// Deaths from one cause among all deaths in a population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathBreakdown {
    pub name: &'static str,
    pub cause_deaths: f64,
    pub other_deaths: f64,
}

impl DeathBreakdown {
    pub fn total(&self) -> f64 {
        self.cause_deaths + self.other_deaths
    }

    pub fn proportional_mortality(&self) -> Result<f64> {
        proportional_mortality(self.cause_deaths, self.total())
    }
}

/// Two populations with the same disease deaths but different totals: the
/// proportion halves even though the disease burden is identical.
pub fn proportional_mortality_populations() -> [DeathBreakdown; 2] {
    [
        DeathBreakdown {
            name: "Population A",
            cause_deaths: 4.0,
            other_deaths: 96.0,
        },
        DeathBreakdown {
            name: "Population B",
            cause_deaths: 4.0,
            other_deaths: 196.0,
        },
    ]
}
