//! Prevalence from incidence and duration (the "bathtub" model).
//!
//! Incidence fills the tub, recovery and death drain it, and the water level is
//! prevalence. For a steady state `P / (1 - P) = I * D`, so
//! `P = I*D / (1 + I*D)`; for rare conditions `P ≈ I * D`.

use crate::error::{Result, ValidationError};

/// Gap (in percentage points) below which the approximation is considered good
pub const GOOD_AGREEMENT_PP: f64 = 2.0;
/// Gap below which the approximation is only fair
pub const FAIR_AGREEMENT_PP: f64 = 10.0;

/// How closely `P ≈ I·D` tracks the exact steady-state prevalence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement {
    Good,
    Fair,
    Poor,
}

impl Agreement {
    pub fn from_difference(difference: f64) -> Self {
        let pp = difference * 100.0;
        if pp < GOOD_AGREEMENT_PP {
            Agreement::Good
        } else if pp < FAIR_AGREEMENT_PP {
            Agreement::Fair
        } else {
            Agreement::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Agreement::Good => "approximation holds",
            Agreement::Fair => "approximation drifting",
            Agreement::Poor => "approximation breaks down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrevalenceResult {
    /// Incidence as a proportion per person-year
    pub incidence_proportion: f64,
    /// `I * D`
    pub id_product: f64,
    pub exact: f64,
    pub approx: f64,
    /// `|exact - approx|` as a proportion
    pub difference: f64,
    pub agreement: Agreement,
}

impl PrevalenceResult {
    /// Height of the tub's water, 0..=100.
    pub fn fill_level(&self) -> f64 {
        fill_level(self.exact)
    }
}

/// Compute exact and approximate prevalence.
///
/// `incidence_per_thousand` is new cases per 1,000 person-years and is
/// converted to a proportion before use.
pub fn compute_prevalence(incidence_per_thousand: f64, duration_years: f64) -> Result<PrevalenceResult> {
    if incidence_per_thousand < 0.0 || incidence_per_thousand.is_nan() {
        return Err(ValidationError::NegativeIncidence);
    }
    if duration_years.is_nan() || duration_years <= 0.0 {
        return Err(ValidationError::NonPositiveDuration);
    }

    let incidence_proportion = incidence_per_thousand / 1000.0;
    let id_product = incidence_proportion * duration_years;
    let exact = id_product / (1.0 + id_product);
    let approx = id_product;
    let difference = (exact - approx).abs();

    Ok(PrevalenceResult {
        incidence_proportion,
        id_product,
        exact,
        approx,
        difference,
        agreement: Agreement::from_difference(difference),
    })
}

/// Water level for a prevalence proportion, capped at 100.
pub fn fill_level(prevalence: f64) -> f64 {
    (prevalence * 100.0).min(100.0)
}

/// Average duration implied by a prevalence and incidence: `D ≈ P / I`.
///
/// Both values are proportions (e.g. `0.01` and `0.0004` per year).
pub fn duration_from_prevalence(prevalence: f64, incidence: f64) -> Result<f64> {
    if prevalence < 0.0 || prevalence.is_nan() {
        return Err(ValidationError::NegativeInput);
    }
    if incidence.is_nan() || incidence <= 0.0 {
        return Err(ValidationError::NonPositiveIncidence);
    }
    Ok(prevalence / incidence)
}
