//! Properties that hold across the whole input space rather than for one example.

use super::assert_close;
use crate::chart::{ChartFrame, PlotPoint};
use crate::error::Warning;
use crate::measures::person_time::compute_incidence_density;
use crate::measures::prevalence::compute_prevalence;
use crate::measures::rate_risk::{compute_rate_risk, rate_from_risk, risk_from_rate};
use crate::measures::ypll::compute_ypll;
use crate::measures::{fertility::compute_birth_rates, person_time::Cohort};

#[test]
fn test_rate_is_risk_times_multiplier() {
    for population in [1.0, 37.0, 500_000.0] {
        for events in [0.0, 1.0, 12.0, 36.0] {
            let r = compute_rate_risk(events, population, 1_000.0).unwrap();
            assert_eq!(r.risk, events / population);
            assert_eq!(r.rate, events / population * 1_000.0);
        }
    }
}

#[test]
fn test_risk_non_decreasing_in_events() {
    let risks: Vec<f64> = (0..200)
        .map(|e| compute_rate_risk(e as f64, 150.0, 100.0).unwrap().risk)
        .collect();
    assert!(risks.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_rate_risk_round_trip() {
    for rate in [1e-6, 0.01, 0.1, 0.5, 1.0, 2.0, 5.0] {
        let back = rate_from_risk(risk_from_rate(rate, 1.0).unwrap(), 1.0).unwrap();
        assert_close(back, rate, rate * 1e-9);
    }
}

#[test]
fn test_risk_from_rate_bounded() {
    for rate in [0.0, 0.3, 3.0, 30.0] {
        let risk = risk_from_rate(rate, 2.0).unwrap();
        assert!((0.0..=1.0).contains(&risk));
    }
}

#[test]
fn test_exact_prevalence_below_approximation() {
    for incidence in [0.5, 5.0, 50.0, 100.0] {
        for duration in [1.0, 10.0, 50.0] {
            let p = compute_prevalence(incidence, duration).unwrap();
            assert!(p.exact <= p.approx);
            assert!(p.exact < 1.0);
        }
    }
}

#[test]
fn test_ypll_total_is_sum_of_parts() {
    let ages = [0.0, 12.5, 74.0, 75.0, 99.0];
    let result = compute_ypll(75.0, &ages).unwrap();
    let sum: f64 = result.per_death.iter().map(|d| d.ypll).sum();
    assert_eq!(result.total, sum);
    assert!(result.per_death.iter().all(|d| d.ypll >= 0.0));
}

#[test]
fn test_functions_are_pure() {
    assert_eq!(
        compute_rate_risk(50.0, 500_000.0, 100_000.0),
        compute_rate_risk(50.0, 500_000.0, 100_000.0)
    );
    assert_eq!(compute_prevalence(5.0, 10.0), compute_prevalence(5.0, 10.0));
    assert_eq!(
        compute_ypll(75.0, &[25.0, 40.0, 80.0]),
        compute_ypll(75.0, &[25.0, 40.0, 80.0])
    );
    let cohort = Cohort::default();
    assert_eq!(
        compute_incidence_density(cohort.participants()),
        compute_incidence_density(cohort.participants())
    );
    assert_eq!(
        compute_birth_rates(8_000.0, 600_000.0, 150_000.0),
        compute_birth_rates(8_000.0, 600_000.0, 150_000.0)
    );
}

#[test]
fn test_events_over_population_only_warns() {
    let result = compute_rate_risk(600_000.0, 500_000.0, 100_000.0);
    assert!(matches!(
        result,
        Ok(r) if r.warning == Some(Warning::EventsExceedPopulation)
    ));
}

#[test]
fn test_projection_preserves_ordering() {
    let frame = ChartFrame::risk_vs_rate();
    let a = frame.project(PlotPoint::new(0.2, 0.5));
    let b = frame.project(PlotPoint::new(0.4, 1.0));
    assert!(b.x > a.x);
    // Larger data y sits higher on screen
    assert!(b.y < a.y);
}
