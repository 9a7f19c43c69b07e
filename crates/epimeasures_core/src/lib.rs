//! Epidemiological measures library
//!
//! Pure, synchronous computations behind the measures explainer:
//! - Rate and risk from counts, and conversion between constant rates and risks
//! - Prevalence from incidence and duration (exact and `P ≈ I·D`)
//! - Years of potential life lost, individual and grouped
//! - Person-time and incidence density
//! - Birth, fertility and perinatal rates
//! - Mortality, case fatality and proportional mortality
//! - A simplified life table, life expectancy and lifetime risk
//! - Mapping chart series from data space to pixel space
//!
//! Every operation either returns its derived values or a [`ValidationError`]
//! describing the blocking input problem. Non-blocking conditions are carried
//! as a [`Warning`] next to the result.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod chart;
pub mod measures;

// ============================================================================
// Input and validation modules
// ============================================================================

pub mod descriptors;
pub mod error;
pub mod input;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use chart::series::{Series, cumulative_risk_series, risk_vs_rate_series, survival_curve};
pub use chart::{ChartFrame, Domain, PlotPoint, ScreenPoint, map_range, svg_path};
pub use descriptors::InputDescriptor;
pub use error::{ValidationError, Warning};
pub use input::{PLACEHOLDER, parse_number};
pub use measures::fertility::{BirthRateInput, BirthRates, compute_birth_rates};
pub use measures::life_table::{LifeTable, LifeTableRow, build_life_table};
pub use measures::person_time::{Cohort, IncidenceDensity, Participant, compute_incidence_density};
pub use measures::prevalence::{Agreement, PrevalenceResult, compute_prevalence};
pub use measures::rate_risk::{
    RateRiskInput, RateRiskResult, TimeUnit, compute_rate_risk, rate_from_risk, risk_from_rate,
};
pub use measures::ypll::{AgeList, DeathYpll, YpllResult, compute_ypll};
