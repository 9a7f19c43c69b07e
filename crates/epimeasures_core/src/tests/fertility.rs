use super::assert_close;
use crate::error::ValidationError;
use crate::measures::fertility::{
    BirthRateInput, EXAMPLE_ASFRS, age_specific_fertility_rate, compute_birth_rates,
    fetal_death_rate, infant_mortality_rate, neonatal_mortality_rate, perinatal_mortality_rate,
    total_fertility_rate,
};

#[test]
fn test_default_birth_rates() {
    let rates = BirthRateInput::default().compute().unwrap();
    assert_eq!(format!("{:.1}", rates.cbr), "13.3");
    assert_eq!(format!("{:.1}", rates.gfr), "53.3");
}

#[test]
fn test_negative_inputs_rejected() {
    assert_eq!(
        compute_birth_rates(-1.0, 100.0, 50.0),
        Err(ValidationError::NegativeInput)
    );
    assert_eq!(
        compute_birth_rates(1.0, 100.0, -50.0),
        Err(ValidationError::NegativeInput)
    );
}

#[test]
fn test_women_cannot_exceed_population() {
    let err = compute_birth_rates(10.0, 100.0, 150.0).unwrap_err();
    assert_eq!(err, ValidationError::SubpopulationExceedsTotal);
    assert_eq!(
        err.to_string(),
        "Women of childbearing age cannot exceed total population."
    );
}

#[test]
fn test_zero_denominators_give_zero() {
    let rates = compute_birth_rates(100.0, 0.0, 0.0).unwrap();
    assert_eq!(rates.cbr, 0.0);
    assert_eq!(rates.gfr, 0.0);

    let rates = compute_birth_rates(100.0, 1000.0, 0.0).unwrap();
    assert_eq!(rates.cbr, 100.0);
    assert_eq!(rates.gfr, 0.0);
}

#[test]
fn test_total_fertility_rate() {
    assert_close(total_fertility_rate(&EXAMPLE_ASFRS, 5.0).unwrap(), 1.775, 1e-12);
    assert!(total_fertility_rate(&EXAMPLE_ASFRS, 0.0).is_err());
    assert_eq!(
        total_fertility_rate(&[10.0, -1.0], 5.0),
        Err(ValidationError::NegativeInput)
    );
}

#[test]
fn test_age_specific_rate() {
    assert_close(age_specific_fertility_rate(50.0, 2_000.0).unwrap(), 25.0, 1e-12);
}

#[test]
fn test_perinatal_family() {
    assert_close(fetal_death_rate(10.0, 990.0).unwrap(), 10.0, 1e-12);
    assert_close(perinatal_mortality_rate(5.0, 3.0, 995.0).unwrap(), 8.0, 1e-12);
    assert_close(neonatal_mortality_rate(4.0, 1_000.0).unwrap(), 4.0, 1e-12);
    assert_close(infant_mortality_rate(6.0, 1_000.0).unwrap(), 6.0, 1e-12);
    assert!(infant_mortality_rate(6.0, 0.0).is_err());
}
