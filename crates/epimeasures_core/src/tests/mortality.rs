use super::assert_close;
use crate::error::ValidationError;
use crate::measures::mortality::{
    case_fatality_rate, complication_rate, mortality_from_incidence, mortality_rate,
    proportional_mortality, proportional_mortality_populations, survival_from_cfr,
};

#[test]
fn test_case_fatality_rate() {
    assert_close(case_fatality_rate(10.0, 200.0).unwrap(), 0.05, 1e-15);
    assert_eq!(
        case_fatality_rate(1.0, 0.0),
        Err(ValidationError::NonPositiveDenominator {
            what: "Number of cases"
        })
    );
    assert_eq!(
        case_fatality_rate(12.0, 10.0),
        Err(ValidationError::DeathsExceedCases)
    );
}

#[test]
fn test_cause_specific_mortality() {
    assert_close(mortality_rate(10.0, 1_000_000.0, 100_000.0).unwrap(), 1.0, 1e-12);
}

#[test]
fn test_outbreak_example() {
    // 400 ill, 16 die, population 2,000,000
    assert_close(case_fatality_rate(16.0, 400.0).unwrap(), 0.04, 1e-15);
    assert_close(mortality_rate(16.0, 2_000_000.0, 100_000.0).unwrap(), 0.8, 1e-12);
}

#[test]
fn test_relationships_between_measures() {
    assert_close(survival_from_cfr(0.2), 0.8, 1e-15);
    assert_close(mortality_from_incidence(0.01, 0.2), 0.002, 1e-15);
    assert_close(complication_rate(3.0, 60.0).unwrap(), 0.05, 1e-15);
}

#[test]
fn test_proportional_mortality_populations() {
    let [a, b] = proportional_mortality_populations();
    assert_eq!(a.total(), 100.0);
    assert_eq!(b.total(), 200.0);
    assert_close(a.proportional_mortality().unwrap(), 0.04, 1e-15);
    assert_close(b.proportional_mortality().unwrap(), 0.02, 1e-15);
    assert_eq!(a.cause_deaths, b.cause_deaths);
}

#[test]
fn test_proportional_mortality_needs_deaths() {
    assert!(proportional_mortality(0.0, 0.0).is_err());
}
