use super::assert_close;
use crate::error::ValidationError;
use crate::measures::ypll::{
    AgeList, DEFAULT_BENCHMARK, MAX_AGES, compute_ypll, example_grouped_deaths, grouped_ypll,
    years_lost, ypll_rate,
};

#[test]
fn test_default_ages_total_85() {
    let ages = AgeList::default();
    let result = compute_ypll(DEFAULT_BENCHMARK, ages.ages()).unwrap();
    let lost: Vec<f64> = result.per_death.iter().map(|d| d.ypll).collect();
    assert_eq!(lost, vec![50.0, 35.0, 0.0]);
    assert_eq!(result.total, 85.0);
}

#[test]
fn test_deaths_at_or_after_benchmark_lose_nothing() {
    assert_eq!(years_lost(75.0, 75.0), 0.0);
    assert_eq!(years_lost(75.0, 90.0), 0.0);
    assert_eq!(years_lost(75.0, 74.5), 0.5);
}

#[test]
fn test_empty_age_list_totals_zero() {
    let result = compute_ypll(75.0, &[]).unwrap();
    assert!(result.per_death.is_empty());
    assert_eq!(result.total, 0.0);
}

#[test]
fn test_benchmark_must_be_positive() {
    assert_eq!(
        compute_ypll(0.0, &[25.0]),
        Err(ValidationError::NonPositiveBenchmark)
    );
    assert_eq!(
        compute_ypll(-75.0, &[25.0]),
        Err(ValidationError::NonPositiveBenchmark)
    );
}

#[test]
fn test_negative_age_is_rejected() {
    assert_eq!(compute_ypll(75.0, &[-1.0]), Err(ValidationError::InvalidAge));
}

#[test]
fn test_age_list_stays_sorted() {
    let mut ages = AgeList::default();
    ages.add(60.0).unwrap();
    ages.add(1.0).unwrap();
    assert_eq!(ages.ages(), &[1.0, 25.0, 40.0, 60.0, 80.0]);

    assert_eq!(ages.remove(0), Some(1.0));
    assert_eq!(ages.remove(10), None);
    assert_eq!(ages.len(), 4);
}

#[test]
fn test_age_list_limits() {
    let mut ages = AgeList::new();
    for i in 0..MAX_AGES {
        ages.add(i as f64 * 5.0).unwrap();
    }
    assert!(ages.is_full());
    assert_eq!(
        ages.add(30.0),
        Err(ValidationError::TooManyAges { max: MAX_AGES })
    );
    assert_eq!(ages.len(), MAX_AGES);
}

#[test]
fn test_age_list_rejects_invalid_age() {
    let mut ages = AgeList::new();
    assert_eq!(ages.add(-5.0), Err(ValidationError::InvalidAge));
    assert_eq!(ages.add(f64::NAN), Err(ValidationError::InvalidAge));
    assert!(ages.is_empty());
}

#[test]
fn test_error_messages_match_widget_text() {
    assert_eq!(
        ValidationError::TooManyAges { max: 10 }.to_string(),
        "Maximum of 10 ages allowed for this demo."
    );
    assert_eq!(
        ValidationError::InvalidAge.to_string(),
        "Please enter a valid, non-negative age."
    );
}

// ============================================================================
// Grouped data and rates
// ============================================================================

#[test]
fn test_grouped_ypll_uses_midpoints() {
    // 2*(75-5) + 9*(75-15) + 4*(75-25)
    let total = grouped_ypll(75.0, &example_grouped_deaths()).unwrap();
    assert_eq!(total, 880.0);
}

#[test]
fn test_ypll_rate_per_100k() {
    assert_close(ypll_rate(840.0, 50_000.0, 100_000.0).unwrap(), 1_680.0, 1e-9);
    assert!(matches!(
        ypll_rate(840.0, 0.0, 100_000.0),
        Err(ValidationError::NonPositiveDenominator { .. })
    ));
}
