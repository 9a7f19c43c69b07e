use super::assert_close;
use crate::error::{ValidationError, Warning};
use crate::measures::rate_risk::{
    DEFAULT_MULTIPLIER, RateRiskInput, TimeUnit, compute_rate_risk, format_risk_percent,
    rate_from_risk, risk_from_rate, to_significant,
};

// ============================================================================
// Calculator
// ============================================================================

#[test]
fn test_default_calculator_inputs() {
    let result = RateRiskInput::default().compute().unwrap();
    assert_close(result.risk, 0.0001, 1e-15);
    assert_close(result.rate, 10.0, 1e-9);
    assert_eq!(result.multiplier, DEFAULT_MULTIPLIER);
    assert_eq!(result.warning, None);
}

#[test]
fn test_zero_population_is_rejected() {
    assert_eq!(
        compute_rate_risk(10.0, 0.0, 1000.0),
        Err(ValidationError::NonPositivePopulation)
    );
    assert_eq!(
        compute_rate_risk(10.0, -5.0, 1000.0),
        Err(ValidationError::NonPositivePopulation)
    );
}

#[test]
fn test_population_checked_before_events() {
    assert_eq!(
        compute_rate_risk(-1.0, 0.0, 1000.0),
        Err(ValidationError::NonPositivePopulation)
    );
}

#[test]
fn test_negative_events_are_rejected() {
    assert_eq!(
        compute_rate_risk(-1.0, 100.0, 1000.0),
        Err(ValidationError::NegativeEvents)
    );
}

#[test]
fn test_events_exceeding_population_warn_but_compute() {
    let result = compute_rate_risk(600_000.0, 500_000.0, 100_000.0).unwrap();
    assert_eq!(result.warning, Some(Warning::EventsExceedPopulation));
    assert_close(result.risk, 1.2, 1e-12);
    assert_close(result.rate, 120_000.0, 1e-6);
}

#[test]
fn test_events_equal_to_population_do_not_warn() {
    let result = compute_rate_risk(100.0, 100.0, 1000.0).unwrap();
    assert_eq!(result.warning, None);
    assert_eq!(result.risk, 1.0);
}

#[test]
fn test_invalid_multiplier_falls_back() {
    for multiplier in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let result = compute_rate_risk(50.0, 500_000.0, multiplier).unwrap();
        assert_eq!(result.multiplier, DEFAULT_MULTIPLIER);
    }
    let result = compute_rate_risk(50.0, 500_000.0, 1_000.0).unwrap();
    assert_eq!(result.multiplier, 1_000.0);
    assert_close(result.rate, 0.1, 1e-12);
}

#[test]
fn test_time_unit_cycles() {
    let mut unit = TimeUnit::default();
    assert_eq!(unit, TimeUnit::Year);
    for _ in 0..TimeUnit::ALL.len() {
        unit = unit.next();
    }
    assert_eq!(unit, TimeUnit::Year);
    assert_eq!(TimeUnit::Month.label(), "month");
}

// ============================================================================
// Rate <-> risk
// ============================================================================

#[test]
fn test_risk_from_rate() {
    assert_close(risk_from_rate(0.1, 1.0).unwrap(), 1.0 - (-0.1f64).exp(), 1e-15);
    assert_eq!(risk_from_rate(0.0, 5.0).unwrap(), 0.0);
    assert_eq!(risk_from_rate(-0.1, 1.0), Err(ValidationError::NegativeRate));
    assert_eq!(risk_from_rate(0.1, -1.0), Err(ValidationError::NegativeTime));
}

#[test]
fn test_rate_from_risk() {
    assert_close(rate_from_risk(0.5, 1.0).unwrap(), 2f64.ln(), 1e-12);
    assert_close(rate_from_risk(0.5, 2.0).unwrap(), 2f64.ln() / 2.0, 1e-12);
    assert_eq!(rate_from_risk(0.0, 1.0).unwrap(), 0.0);
}

#[test]
fn test_rate_at_full_risk_is_infinite() {
    assert_eq!(rate_from_risk(1.0, 1.0).unwrap(), f64::INFINITY);
}

#[test]
fn test_rate_from_risk_rejects_bad_inputs() {
    assert_eq!(rate_from_risk(1.1, 1.0), Err(ValidationError::RiskOutOfRange));
    assert_eq!(rate_from_risk(-0.1, 1.0), Err(ValidationError::RiskOutOfRange));
    assert_eq!(rate_from_risk(0.5, 0.0), Err(ValidationError::NonPositiveTime));
}

// ============================================================================
// Display helpers
// ============================================================================

#[test]
fn test_risk_percent_has_four_significant_digits() {
    assert_eq!(format_risk_percent(0.0001), "0.01000%");
    assert_eq!(format_risk_percent(0.5), "50.00%");
    assert_eq!(format_risk_percent(1.2), "120.0%");
}

#[test]
fn test_significant_digits_carry() {
    assert_eq!(to_significant(9.99996, 4), "10.00");
    assert_eq!(to_significant(0.0, 4), "0.000");
    assert_eq!(to_significant(f64::INFINITY, 4), "∞");
}
