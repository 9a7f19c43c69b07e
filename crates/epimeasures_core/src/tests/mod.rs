//! Tests for the measures library
//!
//! Tests are organized by topic:
//! - `rate_risk` - Rate/risk calculator and rate <-> risk conversion
//! - `prevalence` - Bathtub model and duration from prevalence
//! - `ypll` - Individual and grouped years of potential life lost
//! - `person_time` - Person-time cohort and incidence density
//! - `fertility` - Birth, fertility and perinatal rates
//! - `mortality` - Mortality, case fatality and proportional mortality
//! - `life_table` - Simplified life table and lifetime risk
//! - `chart` - Range mapping, chart frames and generated series
//! - `properties` - Cross-cutting properties (monotonicity, purity, round trips)

mod fertility;
mod mortality;
mod properties;
mod rate_risk;
mod ypll;

/// Assert two floats agree within `tol`.
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
